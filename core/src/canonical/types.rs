// ## File: `src/canonical/types.rs`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// A flat (query) parameter carried a sequence or map.
    NestedInFlat { key: String, kind: &'static str },

    /// Generic validation failure with context.
    Validation(String),
}

impl fmt::Display for CanonicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalError::NestedInFlat { key, kind } =>
                write!(f, "query parameter '{}' must be a scalar, got {}", key, kind),
            CanonicalError::Validation(msg) =>
                write!(f, "canonical validation error: {}", msg),
        }
    }
}

impl std::error::Error for CanonicalError {}
