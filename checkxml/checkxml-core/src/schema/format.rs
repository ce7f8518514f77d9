use std::fmt::{Error, Result, Write as _};

use super::{RecordDef, TypeDef};
use crate::descriptor::{FieldDescriptor, field_descriptors};

/// Format a type definition the way the reconciler sees it:
/// scalar fields are rendered in one line, records and lists are
/// pretty-printed. Record fields are listed under their resolved names.
pub fn format_type_def(label: &str, data_type: &TypeDef) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_labeled_type(label, data_type, &[], 0, &mut out)?;
    Ok(out)
}

pub(crate) fn format_record(record: &RecordDef) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", record.name)?;
    write_record(record, 4, &mut out)?;
    Ok(out)
}

fn format_field(field: &FieldDescriptor<'_>, indent: usize, out: &mut String) -> Result {
    let mut flags = Vec::new();
    if field.attr {
        flags.push("attr: true".to_string());
    }
    if field.omitempty {
        flags.push("omitempty: true".to_string());
    }
    if field.ignored {
        flags.push("ignored: true".to_string());
    }
    if field.subpath.len() > 1 {
        flags.push(format!("path: {}", field.subpath.join(">")));
    }
    format_labeled_type(&field.name, field.data_type, &flags, indent, out)
}

fn format_data_type(data_type: &TypeDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);

    match data_type {
        TypeDef::Record(record) => write_record(record, indent, out)?,
        TypeDef::List(elem) => {
            writeln!(out, "{pad}type: list")?;
            format_labeled_type("item", elem, &[], indent, out)?;
        }
        _ => unreachable!("{data_type:?} is not a compound type"),
    }

    Ok(())
}

fn write_record(record: &RecordDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: record {}", record.name)?;
    writeln!(out, "{pad}fields:")?;
    for child in field_descriptors(record) {
        format_field(&child, indent + 4, out)?;
    }
    Ok(())
}

fn format_labeled_type(
    label: &str,
    data_type: &TypeDef,
    flags: &[String],
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if data_type.is_scalar() {
        write!(out, "{pad}{label}: {{ type: {}", data_type.type_name())?;
        for flag in flags {
            write!(out, ", {flag}")?;
        }
        writeln!(out, " }}")?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        for flag in flags {
            writeln!(out, "{pad}    {flag}")?;
        }
        format_data_type(data_type, indent + 4, out)?;
    }
    Ok(())
}
