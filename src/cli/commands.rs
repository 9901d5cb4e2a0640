use crate::builder::validate::{keys_of, parse_overrides, parse_source, validate_overrides, values_of};
use crate::builder::{create_label_list, LabelListOptions};
use crate::cli::output::{format_label_table, format_lines};
use crate::models::{LabelOverrides, SourceMap};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::fs;
use std::io::Read;

#[derive(Parser)]
#[command(name = "labl")]
#[command(about = "Build typed, labeled option lists from key/value mappings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a label list from a source mapping
    Build {
        /// Source mapping file (JSON object), or '-' for stdin
        source: String,
        /// Label override file (JSON object of key -> label)
        #[arg(long)]
        labels: Option<String>,
        /// Use the mapping's raw values instead of its keys as option values
        #[arg(long = "use-values")]
        use_values: bool,
        /// Reject override keys missing from the source mapping
        #[arg(long)]
        strict: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List the keys of a source mapping
    Keys {
        /// Source mapping file (JSON object), or '-' for stdin
        source: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List the raw values of a source mapping
    Values {
        /// Source mapping file (JSON object), or '-' for stdin
        source: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Check a label override file against a source mapping
    Check {
        /// Source mapping file (JSON object), or '-' for stdin
        source: String,
        /// Label override file to check
        #[arg(long)]
        labels: String,
    },
}

/// Parse arguments and dispatch to the matching handler
pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            source,
            labels,
            use_values,
            strict,
            json,
        } => handle_build(&source, labels.as_deref(), use_values, strict, json),
        Commands::Keys { source, json } => handle_keys(&source, json),
        Commands::Values { source, json } => handle_values(&source, json),
        Commands::Check { source, labels } => handle_check(&source, &labels),
    }
}

/// Read an input document from a file path, or stdin when the path is '-'
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path))
    }
}

fn load_source(path: &str) -> Result<SourceMap> {
    let text = read_input(path)?;
    let source = parse_source(&text)?;
    debug!("source mapping '{}' has {} keys", path, source.len());
    Ok(source)
}

fn load_overrides(path: &str) -> Result<LabelOverrides> {
    let text = read_input(path)?;
    let overrides = parse_overrides(&text)?;
    debug!("override mapping '{}' has {} labels", path, overrides.len());
    Ok(overrides)
}

fn handle_build(
    source_path: &str,
    labels_path: Option<&str>,
    use_values: bool,
    strict: bool,
    json: bool,
) -> Result<()> {
    let source = load_source(source_path)?;
    let overrides = match labels_path {
        Some(path) => Some(load_overrides(path)?),
        None => None,
    };

    let options = LabelListOptions {
        use_enum_values: use_values,
        strict,
    };
    let entries = create_label_list(&source, overrides.as_ref(), &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_label_table(&entries));
    }
    Ok(())
}

fn handle_keys(source_path: &str, json: bool) -> Result<()> {
    let source = load_source(source_path)?;
    let keys = keys_of(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        print!("{}", format_lines(&keys));
    }
    Ok(())
}

fn handle_values(source_path: &str, json: bool) -> Result<()> {
    let source = load_source(source_path)?;
    let values = values_of(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        print!("{}", format_lines(&values));
    }
    Ok(())
}

fn handle_check(source_path: &str, labels_path: &str) -> Result<()> {
    let source = load_source(source_path)?;
    let overrides = load_overrides(labels_path)?;

    validate_overrides(&source, &overrides)?;
    println!(
        "OK: {} override label{} checked against {} source key{}",
        overrides.len(),
        if overrides.len() == 1 { "" } else { "s" },
        source.len(),
        if source.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
