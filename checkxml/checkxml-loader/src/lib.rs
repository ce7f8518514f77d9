//! XML document loader for `checkxml`.
//!
//! Turns markup into an untyped [`Document`] tree:
//!
//! ```text
//! <doc><e1 a="x">t</e1><e2/><e2>u</e2></doc>
//!   └─ root "doc"
//!       └─ { "e1": { "-a": "x", "#text": "t" }, "e2": ["", "u"] }
//! ```
//!
//! Attributes are keyed with the `-` prefix; character data of an element
//! that also has attributes or children goes under `#text`; repeated sibling
//! elements collapse into a sequence. Only the first root element is read.

mod cast;
mod error;
mod loader;

pub use cast::cast_scalar;
pub use error::LoadError;
pub use loader::{LoadOptions, load_bytes, load_reader, load_reader_raw};

pub use checkxml_core::Document;
