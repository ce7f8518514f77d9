//! Untyped document tree produced by the document loader.

use std::fmt::{self, Display, Formatter};

use crate::{error::NodeTypeError, path::SEPARATOR};

/// Leaf value of an untyped document tree.
///
/// Values stay [`Scalar::String`] unless the loader was asked to cast them.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Number(f64),
}

/// A node of the untyped document tree.
///
/// Exactly three shapes exist: a leaf, an element with children and/or
/// attributes, or a run of repeated sibling elements sharing one tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(NodeMap),
    Sequence(Vec<Node>),
}

impl Node {
    pub fn string(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }

    pub fn as_mapping(&self) -> Option<&NodeMap> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn try_str(&self) -> Result<&str, NodeTypeError> {
        match self {
            Node::Scalar(Scalar::String(s)) => Ok(s),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bool(&self) -> Result<bool, NodeTypeError> {
        match self {
            Node::Scalar(Scalar::Bool(b)) => Ok(*b),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_f64(&self) -> Result<f64, NodeTypeError> {
        match self {
            Node::Scalar(Scalar::Number(n)) => Ok(*n),
            _ => Err(self.type_mismatch("Number")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> NodeTypeError {
        NodeTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Node::Scalar(Scalar::String(_)) => "String",
            Node::Scalar(Scalar::Bool(_)) => "Bool",
            Node::Scalar(Scalar::Number(_)) => "Number",
            Node::Mapping(_) => "Mapping",
            Node::Sequence(_) => "Sequence",
        }
    }

    /// Collect every node addressed by a dot-path relative to this node.
    ///
    /// Sequences met along the way are expanded, so `"item.id"` yields the
    /// `id` of each repeated `item`. An empty path yields `self`.
    pub fn values_for_path(&self, path: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        if path.is_empty() {
            out.push(self);
            return out;
        }
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        collect_path(self, &segments, &mut out);
        out
    }
}

fn collect_path<'a>(node: &'a Node, segments: &[&str], out: &mut Vec<&'a Node>) {
    match node {
        Node::Sequence(items) => {
            for item in items {
                collect_path(item, segments, out);
            }
        }
        Node::Mapping(map) => {
            let Some((first, rest)) = segments.split_first() else {
                out.push(node);
                return;
            };
            if let Some(child) = map.get(first) {
                collect_path(child, rest, out);
            }
        }
        Node::Scalar(_) => {
            if segments.is_empty() {
                out.push(node);
            }
        }
    }
}

/// Insertion-ordered mapping of element/attribute keys to child nodes.
///
/// Keys are unique; order follows the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(Vec<(String, Node)>);

impl NodeMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert `value` under `key`, replacing and returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A loaded document: the root element name and the tree beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: String,
    pub node: Node,
}

impl Document {
    pub fn new(root: impl Into<String>, node: Node) -> Self {
        Self {
            root: root.into(),
            node,
        }
    }

    /// Whether the root holds elements (a mapping or a sequence) rather than
    /// bare character data.
    pub fn has_elements(&self) -> bool {
        !self.node.is_scalar()
    }

    /// Collect nodes by a dot-path that starts at the root element name,
    /// e.g. `"doc.e1.-attr"`.
    pub fn values_for_path(&self, path: &str) -> Vec<&Node> {
        let rest = if path == self.root {
            Some("")
        } else {
            path.strip_prefix(self.root.as_str())
                .and_then(|rest| rest.strip_prefix(SEPARATOR))
        };
        match rest {
            Some(rest) => self.node.values_for_path(rest),
            None => Vec::new(),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s:?}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(s) => write!(f, "{s}"),
            Node::Mapping(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Node::Sequence(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}
