//! Encoding-agnostic core types for `checkxml`.
//!
//! This crate provides the untyped document tree ([`Node`] / [`Document`]),
//! the schema description IR ([`TypeDef`] / [`RecordDef`] / [`FieldDef`]) with
//! the [`XmlSchema`] capability trait, and the per-level field-descriptor
//! resolution ([`field_descriptors`]) shared by both reconciliation directions.

mod descriptor;
mod error;
mod node;
pub mod path;
mod schema;
mod tag;

pub use descriptor::{FieldDescriptor, field_descriptors};
pub use error::NodeTypeError;
pub use node::{Document, Node, NodeMap, Scalar};
pub use path::{ATTR_PREFIX, TEXT_KEY};
pub use schema::{FieldDef, RecordDef, TypeDef, XmlName, XmlSchema, format_type_def};
pub use tag::FieldTag;
