//! CLI argument definitions for the offense-code cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "offense-codes",
    version,
    about = "Clean CDCR offense codes for severity-table matching",
    long_about = "Normalize offense codes in the current and prior commitment\n\
                  datasets: statutory-category prefixes (PC, VC, HS, BP, WI, CC)\n\
                  and parenthetical subsection references are stripped so codes\n\
                  can be joined against severity tables keyed by bare codes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean offense codes in the commitment datasets.
    Clean(CleanArgs),

    /// List the recognized statutory category abbreviations.
    Categories,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Where to load the commitment datasets from.
    #[arg(long = "source", value_enum, default_value = "local")]
    pub source: SourceArg,

    /// Directory containing the local data files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory for cleaned files (default: the data directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the JSON run summary.
    #[arg(long = "no-summary-json")]
    pub no_summary_json: bool,
}

/// CLI data-source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    /// CSV files in the local data directory.
    Local,
    /// Raw files from the upstream GitHub repository.
    Github,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
