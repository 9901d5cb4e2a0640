// Label-list construction
//
// A label list is built by enumerating the source mapping's keys in their
// insertion order; the output always has one entry per source key. The two
// output-value conventions (key-mode and value-mode) are exposed as
// differently-named operations, with `create_label_list` as the unified,
// options-driven entry point.

pub mod validate;

use crate::models::{LabelEntry, LabelError, LabelOverrides, RawValue, SourceMap};

/// Options for `create_label_list`
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelListOptions {
    /// Use the source mapping's raw values as option values instead of its
    /// keys (default: false)
    pub use_enum_values: bool,
    /// Reject override keys that are not present in the source mapping
    /// instead of silently ignoring them (default: false)
    pub strict: bool,
}

/// Display label for a key: the override if one exists, else the key itself
fn label_for(key: &str, overrides: Option<&LabelOverrides>) -> String {
    overrides
        .and_then(|map| map.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Build a key-mode label list: each entry's value is the source key
///
/// Overrides missing a key fall back to the key's own text; override keys
/// absent from the source are ignored. Infallible: well-formedness of both
/// mappings is guaranteed by their types.
pub fn key_label_list(
    source: &SourceMap,
    overrides: Option<&LabelOverrides>,
) -> Vec<LabelEntry<String>> {
    source
        .keys()
        .map(|key| LabelEntry::new(key.clone(), label_for(key, overrides)))
        .collect()
}

/// Build a value-mode label list: each entry's value is the source's raw
/// value for that key (labels still resolve against the key)
pub fn value_label_list(
    source: &SourceMap,
    overrides: Option<&LabelOverrides>,
) -> Vec<LabelEntry<RawValue>> {
    source
        .iter()
        .map(|(key, raw)| LabelEntry::new(raw.clone(), label_for(key, overrides)))
        .collect()
}

/// Build a label list according to `options`
///
/// Key-mode values are wrapped as `RawValue::Text` so both modes share one
/// return type. The only failure is `UnknownOverrideKey`, and only when
/// `options.strict` is set.
pub fn create_label_list(
    source: &SourceMap,
    overrides: Option<&LabelOverrides>,
    options: &LabelListOptions,
) -> Result<Vec<LabelEntry<RawValue>>, LabelError> {
    if options.strict {
        if let Some(map) = overrides {
            validate::validate_overrides(source, map)?;
        }
    }

    let entries = if options.use_enum_values {
        value_label_list(source, overrides)
    } else {
        key_label_list(source, overrides)
            .into_iter()
            .map(|entry| LabelEntry::new(RawValue::Text(entry.value), entry.label))
            .collect()
    };

    Ok(entries)
}
