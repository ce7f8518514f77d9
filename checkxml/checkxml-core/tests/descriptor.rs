use checkxml_core::{FieldDef, RecordDef, TypeDef, field_descriptors};

fn record(fields: Vec<FieldDef>) -> RecordDef {
    RecordDef::new("test", fields)
}

#[test]
fn tag_name_takes_precedence_over_field_name() {
    let rec = record(vec![
        FieldDef::new("Yup", TypeDef::Bool).with_tag("ok"),
        FieldDef::new("Why", TypeDef::String),
    ]);
    let names: Vec<_> = field_descriptors(&rec).into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["ok", "Why"]);
}

#[test]
fn attribute_fields_carry_prefix() {
    let rec = record(vec![
        FieldDef::new("Attr", TypeDef::String).with_tag("attr,attr"),
        FieldDef::new("Id", TypeDef::String).with_tag(",attr"),
    ]);
    let descs = field_descriptors(&rec);
    assert_eq!(descs[0].name, "-attr");
    assert_eq!(descs[1].name, "-Id");
    assert!(descs.iter().all(|d| d.attr));
}

#[test]
fn omitempty_is_detected() {
    let rec = record(vec![FieldDef::new("Note", TypeDef::String).with_tag("note,omitempty")]);
    let descs = field_descriptors(&rec);
    assert!(descs[0].omitempty);
    assert!(!descs[0].attr);
}

#[test]
fn ignore_sentinel_falls_back_to_field_name_and_is_flagged() {
    let rec = record(vec![FieldDef::new("Maybe", TypeDef::Bool).with_tag("-")]);
    let descs = field_descriptors(&rec);
    assert_eq!(descs[0].name, "Maybe");
    assert!(descs[0].ignored);
}

#[test]
fn unexported_and_root_name_fields_are_skipped() {
    let rec = record(vec![
        FieldDef::new("XMLName", TypeDef::XmlName).with_tag("Doc"),
        FieldDef::new("cache", TypeDef::String).with_exported(false),
        FieldDef::new("Ok", TypeDef::Bool),
    ]);
    let names: Vec<_> = field_descriptors(&rec).into_iter().map(|d| d.field_name).collect();
    assert_eq!(names, vec!["Ok"]);
}

#[test]
fn subelement_path_matches_on_first_segment_only() {
    let inner = RecordDef::new("test2", vec![FieldDef::new("Maybe", TypeDef::Bool)]);
    let rec = record(vec![FieldDef::new("Why", inner.into_type()).with_tag("Why>Maybe")]);
    let descs = field_descriptors(&rec);
    assert_eq!(descs[0].name, "Why");
    assert_eq!(descs[0].subpath, vec!["Why", "Maybe"]);
    assert!(matches!(descs[0].data_type, TypeDef::Record(r) if r.name == "test2"));
}

#[test]
fn declaration_order_is_preserved() {
    let rec = record(vec![
        FieldDef::new("C", TypeDef::Int),
        FieldDef::new("A", TypeDef::Int),
        FieldDef::new("B", TypeDef::Int),
    ]);
    let names: Vec<_> = field_descriptors(&rec).into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}
