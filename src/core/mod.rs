//! Core conversion logic for chatsheet.
//!
//! This module contains:
//! - [`sheet`] - The in-memory spreadsheet and the [`SheetBuilder`] surface
//! - [`assembler`] - The [`RowAssembler`] that turns fragments into rows
//! - [`rules`] - Per-format row transition rules
//! - [`output`] - Serializers (XLSX, CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatsheet::classifier::{TranscriptFormat, create_classifier};
//! use chatsheet::core::{Column, RowAssembler, Sheet, SheetBuilder};
//!
//! let classifier = create_classifier(TranscriptFormat::Inline);
//! let mut assembler = RowAssembler::new(TranscriptFormat::Inline, Sheet::default());
//! assembler.assemble(&classifier.classify("10:15 AM a1: hello there"));
//!
//! let sheet = assembler.into_sheet();
//! assert_eq!(sheet.read_cell(0, Column::Time), Some("10:15 AM"));
//! ```

pub mod assembler;
pub mod output;
pub mod rules;
pub mod sheet;

pub use assembler::{RowAssembler, RowRules, RowState};
pub use rules::{HeaderRules, InlineRules};
pub use sheet::{Cell, CellStyle, Column, Row, Sheet, SheetBuilder};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
#[cfg(feature = "xlsx-output")]
pub use output::{to_xlsx, write_xlsx};
