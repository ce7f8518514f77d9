//! Error type for schema-definition parsing and resolution.

/// Lightweight error wrapper; messages carry line numbers where known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SchemaDefError(pub String);

impl From<String> for SchemaDefError {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SchemaDefError {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
