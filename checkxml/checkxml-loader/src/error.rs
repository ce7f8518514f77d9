//! Error types for the document loader.

/// Errors produced while turning markup into a [`Document`](checkxml_core::Document).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The markup is not well formed.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// An element or attribute name is not valid UTF-8.
    #[error("invalid UTF-8 in name: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Reading from the input stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The input holds no element at all.
    #[error("no root element found")]
    NoRoot,

    /// The input ended inside an element.
    #[error("unexpected end of input inside element '{name}'")]
    Unclosed { name: String },
}
