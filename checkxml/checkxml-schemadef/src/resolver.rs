//! Record-name resolution: parsed definitions → [`TypeDef`] tree.

use std::collections::HashMap;

use checkxml_core::{FieldDef, RecordDef, TypeDef};

use crate::{
    ast::{ParsedRecord, PrimitiveType, TypeExpr},
    error::SchemaDefError,
};

struct Resolver<'a> {
    records: HashMap<&'a str, &'a ParsedRecord>,
    /// Records currently being expanded, outermost first.
    stack: Vec<&'a str>,
}

/// Resolve `records` into the type rooted at `root`, or at the first
/// declared record when `root` is `None`.
///
/// Every record is resolved, reachable from the root or not, so that a
/// broken definition is reported wherever it appears.
pub fn resolve_records(
    records: &[ParsedRecord],
    root: Option<&str>,
) -> Result<TypeDef, SchemaDefError> {
    let mut by_name = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(previous) = by_name.insert(record.name.as_str(), record) {
            return Err(format!(
                "duplicate record '{}' at line {} (first declared at line {})",
                record.name, record.line, previous.line
            )
            .into());
        }
    }

    let mut resolver = Resolver {
        records: by_name,
        stack: Vec::new(),
    };
    for record in records {
        resolver.resolve_record(&record.name)?;
    }

    let root = match root {
        Some(name) => name,
        None => records
            .first()
            .map(|record| record.name.as_str())
            .ok_or_else(|| SchemaDefError::from("schema declares no records"))?,
    };
    let Some(&root) = resolver.records.get(root) else {
        return Err(format!("root record '{root}' not found").into());
    };
    resolver.resolve_record(&root.name)
}

impl<'a> Resolver<'a> {
    fn resolve_record(&mut self, name: &'a str) -> Result<TypeDef, SchemaDefError> {
        if self.stack.contains(&name) {
            let mut cycle = self.stack.join(" -> ");
            cycle.push_str(" -> ");
            cycle.push_str(name);
            return Err(format!("recursive record '{name}' ({cycle})").into());
        }
        let Some(&record) = self.records.get(name) else {
            return Err(format!("record '{name}' not found").into());
        };

        self.stack.push(name);
        let mut fields = Vec::with_capacity(record.fields.len());
        for field in &record.fields {
            let data_type = self.resolve_type_expr(&field.ty, record)?;
            let mut def = FieldDef::new(field.name.clone(), data_type).with_exported(field.exported);
            if let Some(tag) = &field.tag {
                def = def.with_tag(tag.clone());
            }
            fields.push(def);
        }
        self.stack.pop();

        Ok(RecordDef::new(record.name.clone(), fields).into_type())
    }

    fn resolve_type_expr(
        &mut self,
        expr: &'a TypeExpr,
        current: &ParsedRecord,
    ) -> Result<TypeDef, SchemaDefError> {
        match expr {
            TypeExpr::Primitive(p) => Ok(primitive_type_def(*p)),
            TypeExpr::List(elem) => Ok(TypeDef::List(Box::new(
                self.resolve_type_expr(elem, current)?,
            ))),
            TypeExpr::Named(name) => {
                if !self.records.contains_key(name.as_str()) {
                    return Err(format!(
                        "unresolved type '{name}' in record '{}' (line {})",
                        current.name, current.line
                    )
                    .into());
                }
                self.resolve_record(name)
            }
        }
    }
}

fn primitive_type_def(p: PrimitiveType) -> TypeDef {
    match p {
        PrimitiveType::Bool => TypeDef::Bool,
        PrimitiveType::Int => TypeDef::Int,
        PrimitiveType::Uint => TypeDef::Uint,
        PrimitiveType::Float => TypeDef::Float,
        PrimitiveType::String => TypeDef::String,
        PrimitiveType::XmlName => TypeDef::XmlName,
    }
}
