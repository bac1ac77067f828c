//! CLI argument definitions for the csvclean tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvclean",
    version,
    about = "CSV cleaning tools: aggregate, dedupe, audit, and merge tables",
    long_about = "Clean and reshape tabular CSV data.\n\n\
                  Input files may be comma- or semicolon-delimited; results are\n\
                  always written comma-delimited with a header line."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the CSV files in a directory.
    List(ListArgs),

    /// Count rows per distinct value of a column.
    Count(CountArgs),

    /// Sum a numeric column per distinct value of a grouping column.
    Sum(SumArgs),

    /// Remove rows duplicating an earlier row's key column value.
    Dedupe(DedupeArgs),

    /// Report null and blank cells across every column.
    Audit(AuditArgs),

    /// Left-join two tables on a shared key column.
    Merge(MergeArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Directory to scan (default: current directory).
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Parser)]
pub struct CountArgs {
    /// CSV file to aggregate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column whose distinct values define the groups.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: String,

    /// Write the aggregated table to this path instead of printing it.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SumArgs {
    /// CSV file to aggregate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column whose distinct values define the groups.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: String,

    /// Numeric column to normalize and sum per group.
    #[arg(long = "value", value_name = "COLUMN")]
    pub value: String,

    /// Write the aggregated table to this path instead of printing it.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DedupeArgs {
    /// CSV file to clean.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column whose values identify duplicate rows.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: String,

    /// Write the cleaned table to this path instead of printing it.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// CSV file to audit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the detailed per-row report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Left table: every row is preserved in the output.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Right table: matched rows contribute their non-key columns.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Key column shared by both tables.
    #[arg(long = "on", value_name = "COLUMN")]
    pub on: String,

    /// Write the merged table to this path instead of printing it.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
