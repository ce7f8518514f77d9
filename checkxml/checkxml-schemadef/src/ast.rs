//! Unresolved schema definitions as written in the source text.

/// Built-in type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Bool,
    Int,
    Uint,
    Float,
    String,
    XmlName,
}

/// A field type before record names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(PrimitiveType),
    Named(String),
    List(Box<TypeExpr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub name: String,
    pub ty: TypeExpr,
    pub tag: Option<String>,
    pub exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub name: String,
    pub fields: Vec<ParsedField>,
    /// Line of the `record` keyword, for error messages.
    pub line: usize,
}
