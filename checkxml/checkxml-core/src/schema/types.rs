use std::fmt::{Display, Formatter, Result};

/// Declared type of a schema field.
///
/// Scalar variants end a reconciliation walk; [`TypeDef::Record`] recurses one
/// level; [`TypeDef::List`] recurses once per repeated element.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Bool,
    Int,
    Uint,
    Float,
    String,
    /// Synthesized document root-name field. Never matched against content.
    XmlName,
    Record(RecordDef),
    List(Box<TypeDef>),
}

impl TypeDef {
    pub fn is_scalar(&self) -> bool {
        !matches!(self, TypeDef::Record(_) | TypeDef::List(_))
    }

    pub fn as_record(&self) -> Option<&RecordDef> {
        match self {
            TypeDef::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            TypeDef::Bool => "bool",
            TypeDef::Int => "int",
            TypeDef::Uint => "uint",
            TypeDef::Float => "float",
            TypeDef::String => "string",
            TypeDef::XmlName => "xmlname",
            TypeDef::Record(record) => &record.name,
            TypeDef::List(_) => "list",
        }
    }
}

/// A record (struct) type: its name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn into_type(self) -> TypeDef {
        TypeDef::Record(self)
    }
}

impl Display for RecordDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format::format_record(self)?;
        f.write_str(&text)
    }
}

/// A declared record field.
///
/// `tag` holds the raw tag annotation, e.g. `"e1"`, `"id,attr"`,
/// `"note,omitempty"`, `"a>b"` or `"-"`; see [`FieldTag`](crate::FieldTag).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub tag: Option<String>,
    pub exported: bool,
    pub data_type: TypeDef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, data_type: TypeDef) -> Self {
        Self {
            name: name.into(),
            tag: None,
            exported: true,
            data_type,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }
}
