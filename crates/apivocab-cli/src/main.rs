//! # apivocab CLI entry point
//!
//! Parses arguments, sets up logging, and runs the validator.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use apivocab_cli::validate::{run_validate, ValidateArgs};

/// Validate cross-application API vocabulary conformance.
///
/// Checks each `*-api-vocabulary.v1.json` inventory on its own, then checks
/// all of them together for semantic/canonical drift and legacy-term
/// conflicts.
#[derive(Parser, Debug)]
#[command(name = "apivocab", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
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

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
