//! Textual record schemas for `checkxml`.
//!
//! Lets callers without compiled record types (such as the command-line
//! tool) describe a schema in a small declaration language:
//!
//! ```text
//! schema text
//!   └─ parse_records    – nom-based line parser → ParsedRecord list
//!       └─ resolve_records – record-name resolution → TypeDef
//! ```
//!
//! ```
//! let ty = checkxml_schemadef::parse_schema(
//!     "record Doc {\n  E1 string `e1`\n  E2 string `e2,omitempty`\n}",
//!     None,
//! )
//! .unwrap();
//! assert_eq!(ty.type_name(), "Doc");
//! ```

mod ast;
mod error;
mod lex;
mod parser;
mod resolver;

use checkxml_core::TypeDef;

pub use ast::{ParsedField, ParsedRecord, PrimitiveType, TypeExpr};
pub use error::SchemaDefError;
pub use parser::parse_records;
pub use resolver::resolve_records;

/// Parse and resolve schema text. The root is the record named `root`, or
/// the first declared record.
pub fn parse_schema(text: &str, root: Option<&str>) -> Result<TypeDef, SchemaDefError> {
    let records = parse_records(text)?;
    resolve_records(&records, root)
}
