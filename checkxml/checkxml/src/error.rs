//! Error types for the reconciliation entry points.

use checkxml_loader::LoadError;

/// Errors produced by [`Checker`](crate::Checker) and the free entry points.
///
/// Traversal never fails: shape mismatches between document and schema are
/// reported as result entries. Only document loading can error.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The input could not be loaded as a markup document.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The root element holds neither child elements nor attributes.
    #[error("no elements under root '{root}'")]
    NoElements { root: String },
}
