//! Nutrex CLI - Validate and inspect micronutrient extraction records

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{inspect, validate};

#[derive(Parser)]
#[command(name = "nutrex")]
#[command(author, version, about = "Schema validation for micronutrient extraction records")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a draft extraction record
    Validate(validate::ValidateArgs),
    /// Validate a record and summarize its contents
    Inspect(inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting nutrex CLI");

    match &cli.command {
        Commands::Validate(args) => validate::run(args, &cli),
        Commands::Inspect(args) => inspect::run(args, &cli),
    }
}
