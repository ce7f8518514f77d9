//! Dot-path addressing for document nodes and schema fields.
//!
//! A path joins resolved names from the document root downward with `.`;
//! the root element itself is never part of a path. Attribute segments keep
//! their [`ATTR_PREFIX`].

/// Prefix distinguishing attribute keys from element keys in a [`Node`](crate::Node) mapping.
pub const ATTR_PREFIX: &str = "-";

/// Key holding the character data of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Path separator.
pub const SEPARATOR: char = '.';

/// Append `name` to `parent`, or return `name` alone at the root.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// Number of segments in `path`; the empty path has depth 0.
pub fn depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.split(SEPARATOR).count()
    }
}

/// Whether `path` is well formed: non-empty, with no empty segments.
pub fn is_valid(path: &str) -> bool {
    !path.is_empty() && path.split(SEPARATOR).all(|seg| !seg.is_empty())
}

/// Whether `key` names an attribute.
pub fn is_attribute(key: &str) -> bool {
    key.starts_with(ATTR_PREFIX)
}
