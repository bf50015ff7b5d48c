//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Assign delivery drivers to addresses by greedy compatibility scoring.
#[derive(Debug, Parser)]
#[command(name = "courier-match")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address document, one formatted address per line
    pub addresses: PathBuf,

    /// Driver document, one full name per line
    pub drivers: PathBuf,

    /// Configuration file path
    #[arg(short, long, env = "COURIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
