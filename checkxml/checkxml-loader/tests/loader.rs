use std::io::{BufReader, Read};

use checkxml_core::{Node, Scalar};
use checkxml_loader::{LoadError, LoadOptions, load_bytes, load_reader, load_reader_raw};

fn load(xml: &str) -> checkxml_core::Document {
    load_bytes(xml.as_bytes(), LoadOptions::default()).expect("well-formed fixture")
}

#[test]
fn simple_elements_become_string_scalars() {
    let doc = load("<doc><e1>test</e1><e2>more</e2></doc>");
    assert_eq!(doc.root, "doc");
    let map = doc.node.as_mapping().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["e1", "e2"]);
    assert_eq!(map.get("e1"), Some(&Node::string("test")));
}

#[test]
fn attributes_are_prefixed_and_text_moves_under_text_key() {
    let doc = load(r#"<doc><e1 attr="x">test</e1></doc>"#);
    let e1 = doc.node.as_mapping().unwrap().get("e1").unwrap();
    let e1 = e1.as_mapping().unwrap();
    assert_eq!(e1.get("-attr"), Some(&Node::string("x")));
    assert_eq!(e1.get("#text"), Some(&Node::string("test")));
}

#[test]
fn repeated_siblings_collapse_into_sequence() {
    let doc = load("<doc><item>1</item><other/><item>2</item><item>3</item></doc>");
    let map = doc.node.as_mapping().unwrap();
    let items = map.get("item").unwrap().as_sequence().unwrap();
    assert_eq!(
        items,
        &[Node::string("1"), Node::string("2"), Node::string("3")]
    );
    assert_eq!(map.get("other"), Some(&Node::string("")));
}

#[test]
fn single_occurrence_stays_unwrapped() {
    let doc = load("<yy>\n\t<xx>1</xx>\n</yy>");
    let map = doc.node.as_mapping().unwrap();
    assert_eq!(map.get("xx"), Some(&Node::string("1")));
}

#[test]
fn empty_root_is_a_scalar() {
    let doc = load("<doc></doc>");
    assert_eq!(doc.node, Node::string(""));
    assert!(!doc.has_elements());

    let doc = load(r#"<doc a="1"/>"#);
    assert!(doc.has_elements());
}

#[test]
fn whitespace_between_children_is_dropped() {
    let doc = load(
        "<doc>
            <a>x</a>
            <b>
                <c>y</c>
            </b>
        </doc>",
    );
    let map = doc.node.as_mapping().unwrap();
    assert!(!map.contains_key("#text"));
    let b = map.get("b").unwrap().as_mapping().unwrap();
    assert_eq!(b.get("c"), Some(&Node::string("y")));
}

#[test]
fn prolog_comments_and_namespaces() {
    let doc = load(
        r#"<?xml version="1.0"?>
        <!-- header -->
        <ns:doc xmlns:ns="urn:x"><ns:e1 ns:id="7">a &amp; b</ns:e1><![CDATA[<raw>]]></ns:doc>"#,
    );
    assert_eq!(doc.root, "doc");
    let map = doc.node.as_mapping().unwrap();
    assert_eq!(map.get("-xmlns:ns"), Some(&Node::string("urn:x")));
    assert_eq!(map.get("#text"), Some(&Node::string("<raw>")));
    let e1 = map.get("e1").unwrap().as_mapping().unwrap();
    assert_eq!(e1.get("-id"), Some(&Node::string("7")));
    assert_eq!(e1.get("#text"), Some(&Node::string("a & b")));
}

#[test]
fn casting_applies_to_text_and_attributes() {
    let doc = load_bytes(
        br#"<doc><ok flag="true">1.5</ok><n>12</n><s>word</s></doc>"#,
        LoadOptions { cast_values: true },
    )
    .unwrap();
    let map = doc.node.as_mapping().unwrap();
    let ok = map.get("ok").unwrap().as_mapping().unwrap();
    assert_eq!(ok.get("-flag"), Some(&Node::Scalar(Scalar::Bool(true))));
    assert_eq!(ok.get("#text"), Some(&Node::Scalar(Scalar::Number(1.5))));
    assert_eq!(map.get("n").unwrap().try_f64(), Ok(12.0));
    assert_eq!(map.get("s").unwrap().try_str(), Ok("word"));
}

#[test]
fn reader_input_matches_bytes_input() {
    let xml = "<doc><ok>true</ok><why>it's a test</why></doc>";
    let from_reader = load_reader(xml.as_bytes(), LoadOptions::default()).unwrap();
    assert_eq!(from_reader, load(xml));
}

#[test]
fn raw_bytes_stop_at_root_end() {
    let xml = "<doc><ok>true</ok><why>it's a test</why></doc>";
    let (_, raw) = load_reader_raw(xml.as_bytes(), LoadOptions::default()).unwrap();
    assert_eq!(raw, xml.as_bytes());

    let trailing = format!("{xml}\n<next/>");
    let (doc, raw) = load_reader_raw(trailing.as_bytes(), LoadOptions::default()).unwrap();
    assert_eq!(doc.root, "doc");
    assert_eq!(raw, xml.as_bytes());
}

#[test]
fn each_reader_call_takes_one_document() {
    let mut stream = "<doc><a>1</a></doc>\n<doc><b>2</b></doc>".as_bytes();
    let first = load_reader(&mut stream, LoadOptions::default()).unwrap();
    assert_eq!(first, load("<doc><a>1</a></doc>"));
    assert_eq!(stream, b"\n<doc><b>2</b></doc>");

    let second = load_reader(&mut stream, LoadOptions::default()).unwrap();
    assert_eq!(second, load("<doc><b>2</b></doc>"));
    assert!(stream.is_empty());
}

#[test]
fn raw_bytes_are_what_the_reader_consumed() {
    let first = "<doc><a>1</a><c/></doc>";
    let input = format!("{first}\n<doc><b>2</b></doc>");
    let mut stream = BufReader::with_capacity(4, input.as_bytes());

    let (doc, raw) = load_reader_raw(&mut stream, LoadOptions::default()).unwrap();
    assert_eq!(doc, load(first));
    assert_eq!(raw, first.as_bytes());

    let mut rest = String::new();
    stream.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "\n<doc><b>2</b></doc>");
}

#[test]
fn malformed_markup_is_an_error() {
    let err = load_bytes(b"<doc><a></b></doc>", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Xml(_)), "got {err:?}");
}

#[test]
fn unclosed_and_empty_inputs() {
    let err = load_bytes(b"<doc><a>x</a>", LoadOptions::default()).unwrap_err();
    assert!(
        matches!(err, LoadError::Unclosed { ref name } if name == "doc")
            || matches!(err, LoadError::Xml(_)),
        "got {err:?}"
    );

    let err = load_bytes(b"   ", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::NoRoot), "got {err:?}");
}
