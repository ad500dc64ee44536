//! # Chatsheet
//!
//! A Rust library for turning plain-text chat transcripts into spreadsheets,
//! one row per conversational turn with Time, Speaker and Body columns.
//!
//! ## Overview
//!
//! Two transcript layouts are supported:
//! - **Inline** - every line may start with a clock time and a short speaker
//!   alias (`10:15 AM a1: hello`), and `N minutes` lines mark gaps.
//! - **Header** - a `Name - 3:05 PM` line announces a speaker, followed by
//!   the lines they wrote. Join announcements are dropped.
//!
//! Conversion is a small pipeline: a [`LineClassifier`] splits each line into
//! [`Fragment`]s, a [`RowAssembler`](core::RowAssembler) decides which row and
//! column each fragment lands in, and the resulting [`Sheet`](core::Sheet) is
//! written as XLSX, CSV or JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsheet::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let converter = Converter::new(TranscriptFormat::Inline);
//!
//!     // One transcript, written next to the input as chat.xlsx
//!     let conversion = converter.convert_file(Path::new("chat.txt"), OutputFormat::Xlsx)?;
//!     println!("{} rows", conversion.rows);
//!
//!     // A whole directory; bad files are reported, never fatal
//!     let report = convert_directory(Path::new("transcripts"), &converter, OutputFormat::Xlsx)?;
//!     println!("{} converted, {} failed", report.converted(), report.failed());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## In-memory conversion
//!
//! ```rust
//! use chatsheet::prelude::*;
//!
//! let converter = Converter::new(TranscriptFormat::Header);
//! let sheet = converter.convert_str("Alice - 3:05 PM\nhi everyone\n");
//!
//! assert_eq!(sheet.read_cell(0, Column::Speaker), Some("Alice :"));
//! assert_eq!(sheet.read_cell(0, Column::Body), Some("hi everyone"));
//! ```
//!
//! ## Module Structure
//!
//! - [`classifier`] - [`LineClassifier`] trait, [`TranscriptFormat`], [`create_classifier`](classifier::create_classifier)
//! - [`classifiers`] - [`InlineClassifier`](classifiers::InlineClassifier), [`HeaderClassifier`](classifiers::HeaderClassifier)
//! - [`fragment`] - [`Fragment`] and the [`FragmentsExt`](fragment::FragmentsExt) lookups
//! - [`core`] - Sheet model, row assembly and serializers
//! - [`convert`] - [`Converter`](convert::Converter) for strings and files
//! - [`batch`] - Directory conversion with per-file outcomes
//! - [`config`] - [`ConvertConfig`](config::ConvertConfig), [`StyleSet`](config::StyleSet)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`cli`] - CLI argument types (requires `cli`)
//! - [`error`] - Unified error types ([`ChatsheetError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod batch;
pub mod classifier;
pub mod classifiers;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod format;
pub mod fragment;

// Re-export the main types at the crate root for convenience
pub use classifier::{LineClassifier, TranscriptFormat};
pub use error::{ChatsheetError, Result};
pub use fragment::Fragment;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsheet::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatsheetError, Result, SourceIssue};

    // Classification
    pub use crate::classifier::{LineClassifier, TranscriptFormat, create_classifier};
    pub use crate::fragment::{Fragment, FragmentsExt};

    // Sheet model and assembly
    pub use crate::core::{CellStyle, Column, RowAssembler, Sheet, SheetBuilder};

    // Configuration
    pub use crate::config::{ConvertConfig, StyleSet};

    // Conversion
    pub use crate::batch::{BatchReport, FileOutcome, convert_directory};
    pub use crate::convert::{Conversion, Converter};
    pub use crate::format::{OutputFormat, write_to_format};
}
