use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use checkxml::{CheckConfig, Checker, Report, TypeDef};
use clap::Args;

use super::load_schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Unknown,
    Missing,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the XML document (stdin if not specified)
    input: Option<PathBuf>,

    /// Path to the schema definition
    #[arg(short, long)]
    schema: PathBuf,

    /// Record to use as the document root (first declared if not specified)
    #[arg(short, long)]
    root: Option<String>,

    /// Document path to leave out of unknown tags, e.g. `data.ignore` (repeatable)
    #[arg(long = "ignore", value_name = "PATH")]
    ignore: Vec<String>,

    /// Schema field path to leave out of missing tags, e.g. `more.Not` (repeatable)
    #[arg(long = "ignore-member", value_name = "PATH")]
    ignore_member: Vec<String>,

    /// Also report absent fields tagged `omitempty`
    #[arg(long)]
    report_omitempty: bool,

    /// Cast printed values to numbers and booleans where possible
    #[arg(long)]
    cast: bool,

    /// Print the document values behind each reported path
    #[arg(long)]
    values: bool,
}

impl CheckArgs {
    pub fn run(self, direction: Direction) -> Result<()> {
        let schema = load_schema(&self.schema, self.root.as_deref())?;
        let checker = Checker::new(self.config());
        let report = self.check(&checker, direction, &schema)?;
        tracing::info!(
            root = report.root(),
            count = report.tags.len(),
            "{direction:?} tags"
        );

        let mut out = BufWriter::new(io::stdout().lock());
        self.print(&mut out, &report)?;
        out.flush()?;
        Ok(())
    }

    fn config(&self) -> CheckConfig {
        CheckConfig::builder()
            .tags_to_ignore(self.ignore.iter().cloned())
            .members_to_ignore(self.ignore_member.iter().cloned())
            .skip_omitempty(!self.report_omitempty)
            .cast_values(self.cast)
            .build()
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        Ok(match &self.input {
            Some(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
            )),
            None => Box::new(io::stdin().lock()),
        })
    }

    fn check(&self, checker: &Checker, direction: Direction, schema: &TypeDef) -> Result<Report> {
        let input = self.open_input()?;
        let report = match direction {
            Direction::Unknown => checker.unknown_tags_reader(input, schema)?,
            Direction::Missing => checker.missing_tags_reader(input, schema)?,
        };
        Ok(report)
    }

    fn print(&self, out: &mut impl Write, report: &Report) -> Result<()> {
        for tag in &report.tags {
            if !self.values {
                writeln!(out, "{tag}")?;
                continue;
            }
            let full = format!("{}.{tag}", report.root());
            let values: Vec<String> = report
                .document
                .values_for_path(&full)
                .into_iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "{tag}: {}", values.join(", "))?;
        }
        Ok(())
    }
}
