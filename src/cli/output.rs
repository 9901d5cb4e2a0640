// Output formatting utilities

use crate::models::{LabelEntry, RawValue};
use std::fmt::Display;

/// Format label entries as an aligned two-column table
pub fn format_label_table(entries: &[LabelEntry<RawValue>]) -> String {
    if entries.is_empty() {
        return "No entries\n".to_string();
    }

    let value_cells: Vec<String> = entries.iter().map(|e| e.value.to_string()).collect();
    let value_width = value_cells
        .iter()
        .map(|v| v.chars().count())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .chain(std::iter::once("Label".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  Label\n", "Value", width = value_width));
    out.push_str(&format!(
        "{}  {}\n",
        "-".repeat(value_width),
        "-".repeat(label_width)
    ));
    for (cell, entry) in value_cells.iter().zip(entries) {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            cell,
            entry.label,
            width = value_width
        ));
    }
    out
}

/// Format items one per line
pub fn format_lines<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}\n", item));
    }
    out
}
