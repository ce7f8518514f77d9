use std::{fs, path::PathBuf};

use anyhow::Result;
use checkxml::core::format_type_def;
use clap::Args;

use super::load_schema;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the schema definition
    schema: PathBuf,

    /// Record to print (first declared if not specified)
    #[arg(short, long)]
    root: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let schema = load_schema(&self.schema, self.root.as_deref())?;
        let text = format_type_def(schema.type_name(), &schema)?;

        match self.output {
            Some(path) => fs::write(path, &text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
