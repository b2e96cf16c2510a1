// File: src/error.rs
// Purpose: Errors raised while building rules (never while validating a form)

use std::path::PathBuf;

/// Failure to load or compile a set of validation rules
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("failed to read rule file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("failed to parse rule set: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        error: regex::Error,
    },

    #[error("unknown preset `{0}` (expected one of: email, phone, url)")]
    UnknownPreset(String),

    #[error("field `{0}` sets both `pattern` and `preset`")]
    PatternConflict(String),

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("rule declared without a field name")]
    MissingName,

    #[error("field `{0}` cannot be required to equal itself")]
    SelfReference(String),

    #[error("field `{field}` must equal `{other}`, which is not declared")]
    UnknownEqualsField { field: String, other: String },

    #[error("field `{field}` has min_length {min} greater than max_length {max}")]
    LengthBounds { field: String, min: usize, max: usize },
}
