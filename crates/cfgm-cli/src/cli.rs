//! CLI argument definitions for the grid mapping checker.

use std::path::PathBuf;

use cfgm_model::VocabularyKind;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cfgm",
    version,
    about = "CF grid mapping checker - validate grid mapping attributes",
    long_about = "Validate CF grid mapping declarations against the CF-1.6 and CF-1.7 \
                  grid mapping tables.\n\n\
                  Checks required and mutually exclusive attributes, value types and \
                  ranges, and datum, prime meridian and ellipsoid names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Validate grid mapping declarations from a JSON file.
    Check(CheckArgs),

    /// List the grid mappings known to a convention version.
    Mappings(MappingsArgs),

    /// Look up a name in a controlled vocabulary.
    Vocab(VocabArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON file with one declaration or an array of declarations.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Convention version to validate against (e.g. 1.7 or CF-1.6).
    #[arg(long = "convention", default_value = "1.7")]
    pub convention: String,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Convention version to list.
    #[arg(long = "convention", default_value = "1.7")]
    pub convention: String,
}

#[derive(Parser)]
pub struct VocabArgs {
    /// Vocabulary: datum, prime-meridian or ellipsoid.
    #[arg(value_name = "KIND", value_parser = parse_vocabulary_kind)]
    pub kind: VocabularyKind,

    /// Name to look up.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Convention version whose vocabulary is used.
    #[arg(long = "convention", default_value = "1.7")]
    pub convention: String,
}

fn parse_vocabulary_kind(value: &str) -> Result<VocabularyKind, String> {
    VocabularyKind::parse(value).map_err(|error| error.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Text,
    Json,
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
