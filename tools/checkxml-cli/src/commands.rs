pub mod check;
pub mod schema;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use checkxml::TypeDef;

/// Read and resolve a schema definition file.
pub fn load_schema(path: &Path, root: Option<&str>) -> Result<TypeDef> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let schema = checkxml_schemadef::parse_schema(&text, root)
        .with_context(|| format!("invalid schema {}", path.display()))?;
    tracing::info!(path = %path.display(), root = schema.type_name(), "loaded schema");
    Ok(schema)
}
