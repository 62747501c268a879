//! CLI argument definitions for the coxa assistant.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "coxa",
    version,
    about = "Hip radiographic parameter assistant",
    long_about = "Record bilateral hip radiographic measurements, classify them\n\
                  against their reference ranges, and export the report table\n\
                  to the clipboard as rich text with a plain-text fallback."
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

    /// Allow measurement values in trace logs.
    ///
    /// By default slot values are redacted so patient measurements never
    /// reach log files.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a measurement record and optionally copy the report table.
    Report(ReportArgs),

    /// List the clinical parameter definitions.
    Parameters,

    /// Print an empty record JSON template to stdout.
    Template,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the measurement record JSON file.
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Copy the report table to the system clipboard.
    ///
    /// Writes the styled table and the tab-separated fallback in one
    /// clipboard item; degrades to plain text when the rich write is
    /// unavailable.
    #[arg(long = "copy")]
    pub copy: bool,

    /// Write one payload rendering to stdout.
    #[arg(long = "emit", value_enum, value_name = "FORMAT")]
    pub emit: Option<EmitArg>,
}

/// Payload renderings that can be emitted to stdout.
#[derive(Clone, Copy, ValueEnum)]
pub enum EmitArg {
    Html,
    Plain,
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
