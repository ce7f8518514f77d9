//! Unknown-seeking reconciliation: the document drives the walk.

use checkxml_core::{FieldDescriptor, Node, NodeMap, TypeDef, field_descriptors, path};

use crate::config::IgnoreTags;

/// Collect document paths that no schema field accounts for.
pub(crate) struct UnknownWalker<'a> {
    ignore: &'a IgnoreTags,
    root: &'a str,
    found: Vec<String>,
}

impl<'a> UnknownWalker<'a> {
    pub(crate) fn new(ignore: &'a IgnoreTags, root: &'a str) -> Self {
        Self {
            ignore,
            root,
            found: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.found
    }

    fn record(&mut self, path: &str) {
        let entry = if path.is_empty() { self.root } else { path };
        tracing::trace!(path = entry, "unknown tag");
        self.found.push(entry.to_string());
    }

    pub(crate) fn walk(&mut self, node: &Node, ty: &TypeDef, path: &str) {
        if let TypeDef::List(element) = ty {
            match node {
                Node::Sequence(items) => {
                    for item in items {
                        self.walk(item, element, path);
                    }
                }
                // A single occurrence of a repeated element loads unwrapped.
                single if fits_element(single, element) => self.walk(single, element, path),
                _ => self.record(path),
            }
            return;
        }

        let Some(record) = ty.as_record() else {
            // Attributes and child elements under a scalar field.
            if let Some(map) = node.as_mapping() {
                self.walk_keys(map, path, None);
            }
            return;
        };
        let Some(map) = node.as_mapping() else {
            self.record(path);
            return;
        };

        let fields = field_descriptors(record);
        self.walk_keys(map, path, Some(fields.as_slice()));
    }

    /// With `fields` set, keys resolving to a field are walked and the rest
    /// are reported. Without it every key except the element text is
    /// reported.
    fn walk_keys(&mut self, map: &NodeMap, path: &str, fields: Option<&[FieldDescriptor<'_>]>) {
        for (key, value) in map.iter() {
            if fields.is_none() && key == path::TEXT_KEY {
                continue;
            }
            let full = path::join(path, key);
            if self.ignore.contains(&full) {
                tracing::trace!(path = %full, "ignored tag");
                continue;
            }
            match fields.and_then(|fields| lookup(fields, key)) {
                Some(field) => self.walk(value, field.data_type, &full),
                None => {
                    tracing::trace!(path = %full, "unknown tag");
                    self.found.push(full);
                }
            }
        }
    }
}

/// Later declarations shadow earlier ones with the same resolved name.
fn lookup<'f, 'a>(fields: &'f [FieldDescriptor<'a>], key: &str) -> Option<&'f FieldDescriptor<'a>> {
    fields.iter().rfind(|field| field.name == key)
}

fn fits_element(node: &Node, element: &TypeDef) -> bool {
    match element {
        TypeDef::Record(_) => node.as_mapping().is_some(),
        TypeDef::List(_) => false,
        _ => !matches!(node, Node::Sequence(_)),
    }
}

#[cfg(test)]
mod tests {
    use checkxml_core::{FieldDef, Node, NodeMap, RecordDef, TypeDef};

    use super::*;

    #[test]
    fn singleton_fits_scalar_element() {
        assert!(fits_element(&Node::string("1"), &TypeDef::String));
        assert!(fits_element(&Node::Mapping(NodeMap::new()), &TypeDef::String));
        assert!(!fits_element(&Node::Sequence(vec![]), &TypeDef::String));
    }

    #[test]
    fn singleton_fits_record_element() {
        let record = RecordDef::new("Item", vec![]).into_type();
        assert!(fits_element(&Node::Mapping(NodeMap::new()), &record));
        assert!(!fits_element(&Node::string(""), &record));
    }

    #[test]
    fn mismatched_list_records_path_or_root() {
        let ignore = IgnoreTags::default();
        let mut walker = UnknownWalker::new(&ignore, "doc");
        let items = TypeDef::List(Box::new(RecordDef::new("Item", vec![]).into_type()));
        walker.walk(&Node::string("v"), &items, "a.b");
        walker.walk(&Node::string("v"), &items, "");
        assert_eq!(walker.finish(), vec!["a.b", "doc"]);
    }

    #[test]
    fn duplicate_names_resolve_to_last_declaration() {
        let inner = RecordDef::new("Inner", vec![FieldDef::new("x", TypeDef::String)]);
        let record = RecordDef::new(
            "Doc",
            vec![
                FieldDef::new("First", TypeDef::String).with_tag("e"),
                FieldDef::new("Second", inner.into_type()).with_tag("e"),
            ],
        );
        let fields = field_descriptors(&record);
        assert_eq!(lookup(&fields, "e").map(|f| f.field_name), Some("Second"));
    }

    #[test]
    fn scalar_with_attributes_reports_keys_but_not_text() {
        let ignore = IgnoreTags::new(["e1.-skip"]);
        let mut walker = UnknownWalker::new(&ignore, "doc");
        let map: NodeMap = [
            ("-unit".to_string(), Node::string("cm")),
            ("-skip".to_string(), Node::string("1")),
            (path::TEXT_KEY.to_string(), Node::string("3")),
        ]
        .into_iter()
        .collect();
        walker.walk(&Node::Mapping(map), &TypeDef::String, "e1");
        assert_eq!(walker.finish(), vec!["e1.-unit"]);
    }
}
