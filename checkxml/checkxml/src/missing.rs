//! Missing-seeking reconciliation: the schema drives the walk.

use checkxml_core::{Node, TypeDef, field_descriptors, path};

use crate::config::CheckConfig;

/// Collect schema field paths with no counterpart in the document.
pub(crate) struct MissingWalker<'a> {
    config: &'a CheckConfig,
    found: Vec<String>,
}

impl<'a> MissingWalker<'a> {
    pub(crate) fn new(config: &'a CheckConfig) -> Self {
        Self {
            config,
            found: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.found
    }

    fn record(&mut self, path: String) {
        tracing::trace!(path = %path, "missing tag");
        self.found.push(path);
    }

    /// `node` is `None` where the document has no value for the current
    /// field. An absent or non-mapping element is reported once, by record
    /// type name, and the walk stops there.
    pub(crate) fn walk(&mut self, node: Option<&Node>, ty: &TypeDef, path: &str) {
        if let TypeDef::List(element) = ty {
            match node {
                Some(Node::Sequence(items)) => {
                    for item in items {
                        self.walk(Some(item), element, path);
                    }
                }
                other => self.walk(other, element, path),
            }
            return;
        }

        let Some(record) = ty.as_record() else {
            return;
        };
        let Some(map) = node.and_then(Node::as_mapping) else {
            self.record(path::join(path, &record.name));
            return;
        };

        let depth = path::depth(path) + 1;
        for field in field_descriptors(record) {
            if field.ignored {
                continue;
            }
            let full = path::join(path, &field.name);
            if self.config.members_to_ignore.contains(&full, depth) {
                tracing::trace!(path = %full, depth, "ignored member");
                continue;
            }
            let value = map.get(&field.name);
            if value.is_none() && (!field.omitempty || !self.config.skip_omitempty) {
                self.record(full.clone());
            }
            self.walk(value, field.data_type, &full);
        }
    }
}
