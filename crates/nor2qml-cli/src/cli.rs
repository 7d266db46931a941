//! CLI argument definitions for the Nordic to QuakeML converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nor2qml",
    version,
    about = "Convert Nordic seismic bulletins to QuakeML 1.2",
    long_about = "Convert Nordic seismic bulletin events to QuakeML 1.2 documents.\n\n\
                  Each event is validated field by field, mapped to QuakeML and\n\
                  checked against the QuakeML XSD before anything is written."
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
    /// Convert a Nordic file to QuakeML.
    Convert(ConvertArgs),

    /// List the Nordic code tables and their QuakeML values.
    Codes,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Nordic bulletin file.
    #[arg(value_name = "NORDIC_FILE")]
    pub input: PathBuf,

    /// Write origins only (no magnitudes, picks, amplitudes or arrivals).
    #[arg(long = "short")]
    pub short: bool,

    /// Authority used in every publicID (smi:<AUTHORITY>/...).
    #[arg(long = "authority", value_name = "AUTHORITY", default_value = "wh.atis.ids")]
    pub authority: String,

    /// Network code written into pick waveform identifiers.
    #[arg(long = "network-code", value_name = "CODE", default_value = "netcode")]
    pub network_code: String,

    /// Convert amplitudes with the legacy power formula instead of scaling.
    ///
    /// Only useful to reproduce documents written by older converters; the
    /// resulting values are not in metres.
    #[arg(long = "legacy-amplitude")]
    pub legacy_amplitude: bool,

    /// QuakeML XSD (default: xml/QuakeML-1.2.xsd next to the executable).
    #[arg(long = "schema", value_name = "XSD")]
    pub schema: Option<PathBuf>,

    /// Output directory for generated files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert every event in the file instead of only the first one.
    #[arg(long = "all-events")]
    pub all_events: bool,

    /// Validate and check against the schema without writing documents.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON report of every event and its discrepancies.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
