//! Schema walker: resolves one record level into field descriptors.
//!
//! Resolution is non-recursive. Nested records and list elements are visited
//! by the reconciler, which calls [`field_descriptors`] again at the deeper
//! level. Nothing is cached; every visit re-derives the descriptors.

use crate::{
    path::ATTR_PREFIX,
    schema::{FieldDef, RecordDef, TypeDef},
    tag::FieldTag,
};

/// One record field as seen by the reconciler.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor<'a> {
    /// Key this field matches in a document mapping. Precedence: tag name,
    /// then declared field name; attribute fields carry the attribute prefix.
    pub name: String,
    /// Declared field name.
    pub field_name: &'a str,
    pub attr: bool,
    pub omitempty: bool,
    /// Tag is the ignore sentinel: the field is never decoded.
    pub ignored: bool,
    /// All `>`-separated tag segments. Only the first takes part in matching.
    pub subpath: Vec<String>,
    pub data_type: &'a TypeDef,
}

impl<'a> FieldDescriptor<'a> {
    fn resolve(field: &'a FieldDef) -> Self {
        let tag = field.tag.as_deref().map(FieldTag::parse).unwrap_or_default();
        let base = tag.name().unwrap_or(field.name.as_str());
        let name = if tag.attr {
            format!("{ATTR_PREFIX}{base}")
        } else {
            base.to_string()
        };

        Self {
            name,
            field_name: &field.name,
            attr: tag.attr,
            omitempty: tag.omitempty,
            ignored: tag.ignore,
            subpath: tag.path,
            data_type: &field.data_type,
        }
    }
}

/// Produce the ordered field descriptors for one record level.
///
/// Unexported fields and the synthesized root-name field are skipped.
/// Ignored fields are kept with [`FieldDescriptor::ignored`] set; callers
/// decide what an ignored field means for their direction.
pub fn field_descriptors(record: &RecordDef) -> Vec<FieldDescriptor<'_>> {
    record
        .fields
        .iter()
        .filter(|field| field.exported)
        .filter(|field| !matches!(field.data_type, TypeDef::XmlName))
        .map(FieldDescriptor::resolve)
        .collect()
}
