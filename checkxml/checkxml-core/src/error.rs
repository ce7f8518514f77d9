//! Error types for the core layer.

/// Error returned by the typed accessors on [`Node`](crate::Node).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} node, found {actual}")]
pub struct NodeTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl NodeTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
