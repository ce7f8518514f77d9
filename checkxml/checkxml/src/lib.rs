//! Reconcile XML documents against record schemas.
//!
//! Two reports are available for a document and a schema:
//!
//! - **unknown tags**: document elements and attributes the schema has no
//!   field for, e.g. `["e2", "e1.-attr"]`;
//! - **missing tags**: schema fields the document has no element or
//!   attribute for.
//!
//! Both are lists of dot-paths from (but excluding) the root element, with
//! attribute segments carrying the `-` prefix. Matching is case sensitive.
//!
//! ```
//! use checkxml::{XmlSchema, missing_tags, xml_record};
//!
//! xml_record! {
//!     pub struct Doc {
//!         #[xml = "e1"]
//!         pub e1: String,
//!         #[xml = "e2"]
//!         pub e2: String,
//!     }
//! }
//!
//! let report = missing_tags(b"<doc><e1>test</e1></doc>", &Doc::type_def()).unwrap();
//! assert_eq!(report.tags, vec!["e2"]);
//! assert_eq!(report.root(), "doc");
//! ```
//!
//! The free functions read the process-wide defaults set with
//! [`set_tags_to_ignore`], [`set_members_to_ignore`],
//! [`ignore_omitempty_tag`] and [`set_value_cast`]. Use a [`Checker`] to pass
//! a configuration explicitly.

mod checker;
mod config;
mod error;
mod missing;
mod unknown;

use std::{collections::HashSet, io::BufRead};

pub use checker::{Checker, Report};
pub use checkxml_core as core;
pub use checkxml_core::{
    Document, FieldDef, Node, NodeMap, RecordDef, Scalar, TypeDef, XmlName, XmlSchema, xml_record,
};
pub use checkxml_loader as loader;
pub use config::{
    CheckConfig, CheckConfigBuilder, IgnoreMembers, IgnoreTags, default_config,
    ignore_omitempty_tag, set_members_to_ignore, set_tags_to_ignore, set_value_cast,
};
pub use error::CheckError;

/// Unknown tags in `b`, using the process-wide defaults.
pub fn unknown_tags(b: &[u8], schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().unknown_tags(b, schema)
}

/// Unknown tags read from `r`, using the process-wide defaults.
pub fn unknown_tags_reader<R: BufRead>(r: R, schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().unknown_tags_reader(r, schema)
}

/// Unknown tags read from `r`, keeping the consumed bytes in [`Report::raw`].
pub fn unknown_tags_reader_raw<R: BufRead>(r: R, schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().unknown_tags_reader_raw(r, schema)
}

/// Missing tags in `b`, using the process-wide defaults.
pub fn missing_tags(b: &[u8], schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().missing_tags(b, schema)
}

/// Missing tags read from `r`, using the process-wide defaults.
pub fn missing_tags_reader<R: BufRead>(r: R, schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().missing_tags_reader(r, schema)
}

/// Missing tags read from `r`, keeping the consumed bytes in [`Report::raw`].
pub fn missing_tags_reader_raw<R: BufRead>(r: R, schema: &TypeDef) -> Result<Report, CheckError> {
    Checker::from_defaults().missing_tags_reader_raw(r, schema)
}

/// Check that every path in `check` occurs in `result`.
///
/// Returns `(true, [])` when all are present, otherwise `false` with the
/// absent paths in `check` order.
pub fn has_tags<S: AsRef<str>>(result: &[String], check: &[S]) -> (bool, Vec<String>) {
    let present: HashSet<&str> = result.iter().map(String::as_str).collect();
    let absent: Vec<String> = check
        .iter()
        .map(|path| path.as_ref())
        .filter(|path| !present.contains(path))
        .map(str::to_string)
        .collect();
    (absent.is_empty(), absent)
}
