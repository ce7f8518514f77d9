//! Schema description intermediate representation.

mod derive;
mod format;
mod types;

pub use derive::{XmlName, XmlSchema};
pub use format::format_type_def;
pub use types::{FieldDef, RecordDef, TypeDef};
