// Runtime key/value extraction and input validation
//
// The typed model makes well-formedness structural, so these helpers exist
// for two boundaries: callers that want the stricter subset check on
// override keys, and untyped JSON input (files, stdin) where a malformed
// source mapping or a non-text override value must be rejected.

use crate::models::{LabelError, LabelOverrides, RawValue, SourceMap};
use indexmap::IndexMap;
use serde_json::Value;

/// All keys of the source mapping, in enumeration order
pub fn keys_of(source: &SourceMap) -> Vec<&str> {
    source.keys().map(String::as_str).collect()
}

/// All raw values of the source mapping, in enumeration order
pub fn values_of(source: &SourceMap) -> Vec<&RawValue> {
    source.values().collect()
}

/// Check that every override key exists in the source mapping
///
/// Reports the first offending key, in the override mapping's own order.
pub fn validate_overrides(
    source: &SourceMap,
    overrides: &LabelOverrides,
) -> Result<(), LabelError> {
    for key in overrides.keys() {
        if !source.contains_key(key) {
            return Err(LabelError::UnknownOverrideKey { key: key.clone() });
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a JSON source mapping: an object whose values are text or numbers
///
/// Key order in the document is preserved. Null, non-object documents, and
/// entries with boolean/array/object/null values are rejected as
/// `InvalidInput`.
pub fn parse_source(input: &str) -> Result<SourceMap, LabelError> {
    let parsed: Option<IndexMap<String, Value>> = serde_json::from_str(input)
        .map_err(|e| LabelError::InvalidInput(format!("source mapping must be a JSON object: {}", e)))?;
    let object =
        parsed.ok_or_else(|| LabelError::InvalidInput("source mapping is null".to_string()))?;

    let mut source = SourceMap::with_capacity(object.len());
    for (key, value) in object {
        let raw = match value {
            Value::String(s) => RawValue::Text(s),
            Value::Number(n) => RawValue::Number(n),
            other => {
                return Err(LabelError::InvalidInput(format!(
                    "value for key '{}' must be text or a number, got {}",
                    key,
                    json_type_name(&other)
                )))
            }
        };
        source.insert(key, raw);
    }
    Ok(source)
}

/// Parse a JSON override mapping: an object whose values are all text
pub fn parse_overrides(input: &str) -> Result<LabelOverrides, LabelError> {
    let parsed: Option<IndexMap<String, Value>> = serde_json::from_str(input)
        .map_err(|e| {
            LabelError::InvalidInput(format!("override mapping must be a JSON object: {}", e))
        })?;
    let object =
        parsed.ok_or_else(|| LabelError::InvalidInput("override mapping is null".to_string()))?;

    let mut overrides = LabelOverrides::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::String(label) => {
                overrides.insert(key, label);
            }
            other => {
                return Err(LabelError::InvalidInput(format!(
                    "override label for key '{}' must be text, got {}",
                    key,
                    json_type_name(&other)
                )))
            }
        }
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> SourceMap {
        let mut source = SourceMap::new();
        source.insert("RED".to_string(), RawValue::from("red"));
        source.insert("BLUE".to_string(), RawValue::from("blue"));
        source
    }

    #[test]
    fn test_keys_of_preserves_order() {
        assert_eq!(keys_of(&colors()), vec!["RED", "BLUE"]);
    }

    #[test]
    fn test_values_of_preserves_order() {
        let source = colors();
        let values = values_of(&source);
        assert_eq!(values, vec![&RawValue::from("red"), &RawValue::from("blue")]);
    }

    #[test]
    fn test_validate_overrides_accepts_subset() {
        let mut overrides = LabelOverrides::new();
        overrides.insert("RED".to_string(), "赤".to_string());
        assert!(validate_overrides(&colors(), &overrides).is_ok());
    }

    #[test]
    fn test_validate_overrides_rejects_unknown_key() {
        let mut overrides = LabelOverrides::new();
        overrides.insert("YELLOW".to_string(), "黄色".to_string());

        let err = validate_overrides(&colors(), &overrides).unwrap_err();
        assert_eq!(
            err,
            LabelError::UnknownOverrideKey {
                key: "YELLOW".to_string()
            }
        );
    }

    #[test]
    fn test_parse_source_preserves_document_order() {
        let source = parse_source(r#"{"RED":"red","BLUE":"blue","GREEN":"green"}"#).unwrap();
        assert_eq!(keys_of(&source), vec!["RED", "BLUE", "GREEN"]);
    }

    #[test]
    fn test_parse_source_accepts_numbers() {
        let source = parse_source(r#"{"PENDING":1,"APPROVED":2}"#).unwrap();
        assert_eq!(source.get("PENDING"), Some(&RawValue::from(1)));
        assert_eq!(source.get("APPROVED"), Some(&RawValue::from(2)));
    }

    #[test]
    fn test_parse_source_rejects_null() {
        let err = parse_source("null").unwrap_err();
        assert_eq!(
            err,
            LabelError::InvalidInput("source mapping is null".to_string())
        );
    }

    #[test]
    fn test_parse_source_rejects_non_object() {
        assert!(parse_source("[1,2,3]").is_err());
        assert!(parse_source("\"red\"").is_err());
        assert!(parse_source("not json at all").is_err());
    }

    #[test]
    fn test_parse_source_rejects_non_scalar_values() {
        let err = parse_source(r#"{"RED":true}"#).unwrap_err();
        match err {
            LabelError::InvalidInput(msg) => {
                assert!(msg.contains("RED"));
                assert!(msg.contains("boolean"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_overrides_rejects_non_text_label() {
        let err = parse_overrides(r#"{"RED":7}"#).unwrap_err();
        match err {
            LabelError::InvalidInput(msg) => assert!(msg.contains("must be text")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_overrides_accepts_empty_object() {
        let overrides = parse_overrides("{}").unwrap();
        assert!(overrides.is_empty());
    }
}
