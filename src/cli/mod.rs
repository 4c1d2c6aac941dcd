//! CLI argument parsing for namecat
//!
//! Global flags: --catalog, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod commands;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use namecat_core::format::OutputFormat;

/// Namecat - discover related names in a name catalog
#[derive(Parser, Debug)]
#[command(name = "namecat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file (JSON array of names); defaults to ./names.json
    #[arg(long, global = true, env = "NAMECAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Engine configuration file; defaults to ./namecat.toml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "namecat_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
