//! Line-oriented schema parser built on nom combinators.
//!
//! ```text
//! // comment
//! record Doc {
//!     XMLName xmlname `doc`
//!     Ok      bool
//!     Why     Detail  `why,omitempty`
//!     Items   []Item  `item`
//!     priv cache string
//! }
//! ```
//!
//! One declaration per line: a `record Name {` opener, a closing `}`, or a
//! field `[priv] Name type [`tag`]`. Records cannot nest.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, space0},
    combinator::{map, opt, recognize, value},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::{
    ast::{ParsedField, ParsedRecord, PrimitiveType, TypeExpr},
    error::SchemaDefError,
    lex::strip_line_comments,
};

/// Parse schema text into records, in declaration order.
pub fn parse_records(text: &str) -> Result<Vec<ParsedRecord>, SchemaDefError> {
    let mut records = Vec::new();
    let mut current: Option<ParsedRecord> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_line_comments(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, closed)) = parse_record_open(line) {
            if let Some(open) = &current {
                return Err(format!(
                    "nested record '{name}' at line {line_no} (record '{}' is still open)",
                    open.name
                )
                .into());
            }
            let record = ParsedRecord {
                name: name.to_string(),
                fields: Vec::new(),
                line: line_no,
            };
            if closed {
                records.push(record);
            } else {
                current = Some(record);
            }
            continue;
        }

        if line == "}" || line == "};" {
            match current.take() {
                Some(record) => records.push(record),
                None => return Err(format!("unmatched closing brace at line {line_no}").into()),
            }
            continue;
        }

        if let Some(record) = current.as_mut() {
            let field = parse_field(line)
                .map_err(|e| SchemaDefError(format!("parse error at line {line_no}: {e}")))?;
            record.fields.push(field);
            continue;
        }

        return Err(format!("unexpected top-level statement at line {line_no}: {line}").into());
    }

    if let Some(open) = current {
        return Err(format!(
            "unclosed record '{}' opened at line {}",
            open.name, open.line
        )
        .into());
    }
    Ok(records)
}

/// `record Name {`, optionally closed on the same line with `}`.
fn record_decl(input: &str) -> IResult<&str, (&str, bool)> {
    map(
        tuple((
            tag("record"),
            ws1,
            identifier,
            ws,
            char('{'),
            ws,
            opt(char('}')),
        )),
        |(_, _, name, _, _, _, close)| (name, close.is_some()),
    )(input)
}

fn parse_record_open(line: &str) -> Option<(&str, bool)> {
    match record_decl(line) {
        Ok((rest, decl)) if rest.trim().is_empty() => Some(decl),
        _ => None,
    }
}

fn parse_field(line: &str) -> Result<ParsedField, SchemaDefError> {
    match field_decl(line) {
        Ok((remaining, def)) if remaining.trim().is_empty() => Ok(def),
        Ok((remaining, _)) => {
            Err(format!("unexpected trailing characters in field: {remaining}").into())
        }
        Err(e) => Err(format!("failed to parse field declaration: {e}").into()),
    }
}

/// Parse an identifier (alphanumeric + underscore, must start with alpha or _)
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    value((), space0)(input)
}

fn ws1(input: &str) -> IResult<&str, ()> {
    value((), take_while1(|c: char| c.is_whitespace()))(input)
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn primitive_type(input: &str) -> IResult<&str, PrimitiveType> {
    terminated(
        alt((
            value(PrimitiveType::Bool, tag("bool")),
            value(PrimitiveType::Uint, tag("uint")),
            value(PrimitiveType::Int, tag("int")),
            value(PrimitiveType::Float, tag("float")),
            value(PrimitiveType::String, tag("string")),
            value(PrimitiveType::XmlName, tag("xmlname")),
        )),
        keyword_boundary,
    )(input)
}

/// `[]T`, a primitive, or a record name.
fn type_expr(input: &str) -> IResult<&str, TypeExpr> {
    alt((
        map(preceded(tag("[]"), type_expr), |elem| {
            TypeExpr::List(Box::new(elem))
        }),
        map(primitive_type, TypeExpr::Primitive),
        map(identifier, |name| TypeExpr::Named(name.to_string())),
    ))(input)
}

/// Back-quoted tag, e.g. `` `why,omitempty` ``.
fn field_tag(input: &str) -> IResult<&str, &str> {
    delimited(char('`'), take_while(|c: char| c != '`'), char('`'))(input)
}

/// `Name type [`tag`]`
fn field_body(input: &str) -> IResult<&str, ParsedField> {
    map(
        tuple((identifier, ws1, type_expr, ws, opt(field_tag))),
        |(name, _, ty, _, tag)| ParsedField {
            name: name.to_string(),
            ty,
            tag: tag.map(str::to_string),
            exported: true,
        },
    )(input)
}

fn field_decl(input: &str) -> IResult<&str, ParsedField> {
    alt((
        map(
            preceded(tuple((tag("priv"), keyword_boundary, ws1)), field_body),
            |field| ParsedField {
                exported: false,
                ..field
            },
        ),
        field_body,
    ))(input)
}
