use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Finite source mapping from unique text keys to raw values.
/// Insertion order is significant and is preserved in all outputs.
pub type SourceMap = IndexMap<String, RawValue>;

/// Optional, partial mapping from source keys to display labels.
pub type LabelOverrides = IndexMap<String, String>;

/// Raw value of a source mapping entry: text or a number
///
/// Numbers are held as `serde_json::Number` so integer values round-trip
/// exactly (1 stays 1, never 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    /// Text content, if this value is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            RawValue::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, RawValue::Number(_))
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(serde_json::Number::from(n))
    }
}

/// One entry of a label list: a selectable value and its display label
///
/// Key-mode lists carry `LabelEntry<String>` (the value is the source key);
/// value-mode and unified lists carry `LabelEntry<RawValue>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry<V> {
    pub value: V,
    pub label: String,
}

impl<V> LabelEntry<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_display() {
        assert_eq!(RawValue::from("red").to_string(), "red");
        assert_eq!(RawValue::from(42).to_string(), "42");
    }

    #[test]
    fn test_raw_value_accessors() {
        assert_eq!(RawValue::from("red").as_text(), Some("red"));
        assert_eq!(RawValue::from(1).as_text(), None);
        assert!(RawValue::from(1).is_number());
        assert!(!RawValue::from("red").is_number());
    }

    #[test]
    fn test_raw_value_serializes_untagged() {
        let text = serde_json::to_string(&RawValue::from("red")).unwrap();
        assert_eq!(text, "\"red\"");
        let number = serde_json::to_string(&RawValue::from(2)).unwrap();
        assert_eq!(number, "2");
    }

    #[test]
    fn test_label_entry_json_shape() {
        let entry = LabelEntry::new(RawValue::from(1), "保留中");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "{\"value\":1,\"label\":\"保留中\"}");

        let back: LabelEntry<RawValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_source_map_preserves_insertion_order() {
        let mut source = SourceMap::new();
        source.insert("RED".to_string(), RawValue::from("red"));
        source.insert("BLUE".to_string(), RawValue::from("blue"));
        source.insert("GREEN".to_string(), RawValue::from("green"));

        let keys: Vec<&String> = source.keys().collect();
        assert_eq!(keys, vec!["RED", "BLUE", "GREEN"]);
    }
}
