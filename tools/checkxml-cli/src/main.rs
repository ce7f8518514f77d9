mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    check::{CheckArgs, Direction},
    schema::SchemaArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "checkxml",
    about = "Compare XML documents with a record schema"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List document elements and attributes the schema does not declare
    Unknown(CheckArgs),
    /// List schema fields the document does not contain
    Missing(CheckArgs),
    /// Print the resolved schema
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Unknown(args) => args.run(Direction::Unknown),
        Commands::Missing(args) => args.run(Direction::Missing),
        Commands::Schema(args) => args.run(),
    }
}
