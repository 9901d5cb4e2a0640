use thiserror::Error;

/// Failure taxonomy for label-list construction
///
/// Exactly two kinds exist. `InvalidInput` covers a source mapping that is
/// absent, null, or malformed, and override entries whose values are not
/// text. `UnknownOverrideKey` is raised only in strict mode, when an
/// override key has no counterpart in the source mapping; the default
/// contract tolerates such keys silently.
#[derive(Debug, Error, PartialEq)]
pub enum LabelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown override key '{key}' (not present in the source mapping)")]
    UnknownOverrideKey { key: String },
}
