//! Labl - build typed, labeled option lists for select-style widgets
//!
//! This library provides the core functionality for Labl, including:
//! - Data models for raw values, source mappings, and label entries
//! - The label-list builder (key-mode and value-mode)
//! - Runtime key/value extraction and override validation
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use labl::builder::key_label_list;
//! use labl::models::{LabelOverrides, RawValue, SourceMap};
//!
//! let mut colors = SourceMap::new();
//! colors.insert("RED".to_string(), RawValue::from("red"));
//! colors.insert("BLUE".to_string(), RawValue::from("blue"));
//!
//! let mut labels = LabelOverrides::new();
//! labels.insert("RED".to_string(), "Rouge".to_string());
//!
//! let list = key_label_list(&colors, Some(&labels));
//! assert_eq!(list[0].value, "RED");
//! assert_eq!(list[0].label, "Rouge");
//! assert_eq!(list[1].label, "BLUE");
//! ```

pub mod builder;
pub mod cli;
pub mod models;
