use checkxml_core::{Document, Node, NodeMap, Scalar};

fn sample() -> Document {
    let item = |id: &str| {
        Node::Mapping(
            [("-id".to_string(), Node::string(id))]
                .into_iter()
                .collect(),
        )
    };
    let mut map = NodeMap::new();
    map.insert("e1", Node::string("test"));
    map.insert("item", Node::Sequence(vec![item("1"), item("2")]));
    Document::new("doc", Node::Mapping(map))
}

#[test]
fn node_map_keeps_insertion_order_and_replaces_in_place() {
    let mut map = NodeMap::new();
    map.insert("b", Node::string("1"));
    map.insert("a", Node::string("2"));
    let previous = map.insert("b", Node::string("3"));

    assert_eq!(previous, Some(Node::string("1")));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(map.get("b"), Some(&Node::string("3")));
    assert_eq!(map.len(), 2);
}

#[test]
fn values_for_path_expands_sequences() {
    let doc = sample();
    let ids: Vec<_> = doc
        .values_for_path("doc.item.-id")
        .into_iter()
        .map(|n| n.try_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn values_for_path_requires_root_prefix() {
    let doc = sample();
    assert_eq!(doc.values_for_path("doc.e1"), vec![&Node::string("test")]);
    assert!(doc.values_for_path("other.e1").is_empty());
    assert!(doc.values_for_path("docx.e1").is_empty());
    assert!(doc.values_for_path("doc.missing").is_empty());
    assert_eq!(doc.values_for_path("doc").len(), 1);
}

#[test]
fn typed_accessors_report_mismatch() {
    let node = Node::Scalar(Scalar::Bool(true));
    assert_eq!(node.try_bool(), Ok(true));
    let err = node.try_str().unwrap_err();
    assert_eq!(err.to_string(), "expected String node, found Bool");
    assert!(Node::Sequence(vec![]).try_f64().is_err());
}

#[test]
fn document_without_elements() {
    assert!(!Document::new("doc", Node::string("")).has_elements());
    assert!(sample().has_elements());
}

#[test]
fn display_renders_compact_tree() {
    let doc = sample();
    assert_eq!(
        doc.node.to_string(),
        r#"{"e1": "test", "item": [{"-id": "1"}, {"-id": "2"}]}"#
    );
}
