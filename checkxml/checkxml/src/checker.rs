//! Entry points for both reconciliation directions.

use std::io::BufRead;

use checkxml_core::{Document, TypeDef};
use checkxml_loader::{LoadOptions, load_bytes, load_reader, load_reader_raw};

use crate::{
    config::{CheckConfig, default_config},
    error::CheckError,
    has_tags,
    missing::MissingWalker,
    unknown::UnknownWalker,
};

/// Outcome of one reconciliation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Dot-paths in traversal order (unknown) or declaration order (missing).
    pub tags: Vec<String>,
    /// The loaded document; its scalars are cast if the configuration asked for it.
    pub document: Document,
    /// Bytes consumed from the input, up to the end of the root element.
    /// Only set by the `*_reader_raw` entry points.
    pub raw: Option<Vec<u8>>,
}

impl Report {
    /// Root element name of the checked document.
    pub fn root(&self) -> &str {
        &self.document.root
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// See [`has_tags`](crate::has_tags).
    pub fn has_tags<S: AsRef<str>>(&self, check: &[S]) -> (bool, Vec<String>) {
        has_tags(&self.tags, check)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Unknown,
    Missing,
}

/// Runs reconciliation with one fixed [`CheckConfig`].
///
/// A `Checker` is read-only once built and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// A checker over a snapshot of the process-wide defaults.
    pub fn from_defaults() -> Self {
        Self::new(default_config())
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            cast_values: self.config.cast_values,
        }
    }

    /// Document nodes in `b` that `schema` has no field for.
    pub fn unknown_tags(&self, b: &[u8], schema: &TypeDef) -> Result<Report, CheckError> {
        let document = load_bytes(b, self.load_options())?;
        self.report(Direction::Unknown, document, None, schema)
    }

    /// Reads one document from `r`; bytes after the root element stay unread.
    pub fn unknown_tags_reader<R: BufRead>(
        &self,
        r: R,
        schema: &TypeDef,
    ) -> Result<Report, CheckError> {
        let document = load_reader(r, self.load_options())?;
        self.report(Direction::Unknown, document, None, schema)
    }

    /// Like [`unknown_tags_reader`](Self::unknown_tags_reader), also
    /// returning the consumed bytes.
    pub fn unknown_tags_reader_raw<R: BufRead>(
        &self,
        r: R,
        schema: &TypeDef,
    ) -> Result<Report, CheckError> {
        let (document, raw) = load_reader_raw(r, self.load_options())?;
        self.report(Direction::Unknown, document, Some(raw), schema)
    }

    /// Unknown-tag check over an already loaded document.
    pub fn unknown_in_document(
        &self,
        document: &Document,
        schema: &TypeDef,
    ) -> Result<Vec<String>, CheckError> {
        if !document.has_elements() {
            return Err(CheckError::NoElements {
                root: document.root.clone(),
            });
        }
        let mut walker = UnknownWalker::new(&self.config.tags_to_ignore, &document.root);
        walker.walk(&document.node, schema, "");
        let tags = walker.finish();
        tracing::debug!(root = %document.root, count = tags.len(), "unknown tags");
        Ok(tags)
    }

    /// Schema fields of `schema` with no counterpart in `b`.
    pub fn missing_tags(&self, b: &[u8], schema: &TypeDef) -> Result<Report, CheckError> {
        let document = load_bytes(b, self.load_options())?;
        self.report(Direction::Missing, document, None, schema)
    }

    pub fn missing_tags_reader<R: BufRead>(
        &self,
        r: R,
        schema: &TypeDef,
    ) -> Result<Report, CheckError> {
        let document = load_reader(r, self.load_options())?;
        self.report(Direction::Missing, document, None, schema)
    }

    /// Like [`missing_tags_reader`](Self::missing_tags_reader), also
    /// returning the consumed bytes.
    pub fn missing_tags_reader_raw<R: BufRead>(
        &self,
        r: R,
        schema: &TypeDef,
    ) -> Result<Report, CheckError> {
        let (document, raw) = load_reader_raw(r, self.load_options())?;
        self.report(Direction::Missing, document, Some(raw), schema)
    }

    /// Missing-tag check over an already loaded document.
    ///
    /// A root holding only character data is reported as a single entry
    /// naming the root record type.
    pub fn missing_in_document(&self, document: &Document, schema: &TypeDef) -> Vec<String> {
        let mut walker = MissingWalker::new(&self.config);
        walker.walk(Some(&document.node), schema, "");
        let tags = walker.finish();
        tracing::debug!(root = %document.root, count = tags.len(), "missing tags");
        tags
    }

    fn report(
        &self,
        direction: Direction,
        document: Document,
        raw: Option<Vec<u8>>,
        schema: &TypeDef,
    ) -> Result<Report, CheckError> {
        let tags = match direction {
            Direction::Unknown => self.unknown_in_document(&document, schema)?,
            Direction::Missing => self.missing_in_document(&document, schema),
        };
        Ok(Report {
            tags,
            document,
            raw,
        })
    }
}
