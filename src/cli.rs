//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Layout`] - Transcript layout selector
//! - [`OutputFormat`] - Output format options
//!
//! Both enums convert into their library counterparts
//! ([`TranscriptFormat`](crate::classifier::TranscriptFormat) and
//! [`format::OutputFormat`](crate::format::OutputFormat)).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Convert chat transcripts into spreadsheets.
///
/// INPUT may be a single transcript or a directory; every file of a
/// directory is tried and reported on.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsheet")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsheet inline
    chatsheet v1 transcripts/
    chatsheet header standup.txt -f csv
    chatsheet v2 logs/ --source-ext log --sheet-name Standup")]
pub struct Args {
    /// Transcript layout
    #[arg(value_enum)]
    pub layout: Layout,

    /// Transcript file or directory of transcripts
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "xlsx")]
    pub output_format: OutputFormat,

    /// Extension a transcript must have (without the dot)
    #[arg(long, value_name = "EXT", default_value = "txt")]
    pub source_ext: String,

    /// Name of the worksheet
    #[arg(long, value_name = "NAME", default_value = "Chat")]
    pub sheet_name: String,

    /// Show per-file diagnostics (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Transcript layouts accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `10:15 AM a1: text` lines
    #[value(alias = "v1")]
    #[serde(alias = "v1")]
    Inline,

    /// `Name - 3:05 PM` header followed by text lines
    #[value(alias = "v2")]
    #[serde(alias = "v2")]
    Header,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Inline => write!(f, "Inline"),
            Layout::Header => write!(f, "Header"),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled spreadsheet (default)
    #[default]
    Xlsx,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of rows
    Json,
}
