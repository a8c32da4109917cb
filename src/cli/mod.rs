//! CLI argument parsing for linkwatch
//!
//! Global flags: --store, --config, --format, --quiet, --verbose

pub mod commands;
pub mod parse;
pub mod prompt;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use linkwatch_core::format::OutputFormat;
use parse::parse_format;

/// Linkwatch - track reported negative links and retire duplicate reports
#[derive(Parser, Debug)]
#[command(name = "linkwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store endpoint URL or path to a local store file
    #[arg(long, global = true, env = "LINKWATCH_STORE")]
    pub store: Option<String>,

    /// Config file (default: ~/.config/linkwatch/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
