//! Output format types for the chatsheet library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn example() -> chatsheet::Result<()> {
//! use chatsheet::core::{CellStyle, Column, Sheet, SheetBuilder};
//! use chatsheet::format::{OutputFormat, write_to_format};
//! use std::path::Path;
//!
//! let mut sheet = Sheet::default();
//! sheet.write_cell(0, Column::Body, "hello", CellStyle::Wrapped);
//!
//! // Write using format enum
//! write_to_format(&sheet, Path::new("chat.csv"), OutputFormat::Csv)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path(Path::new("chat.xlsx"))?;
//! assert_eq!(format, OutputFormat::Xlsx);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::sheet::Sheet;
use crate::error::ChatsheetError;

/// Output format for converted transcripts.
///
/// - [`Xlsx`](OutputFormat::Xlsx) - Styled spreadsheet (default)
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited values, no styling
/// - [`Json`](OutputFormat::Json) - Array of row objects
///
/// # Example
///
/// ```rust
/// use chatsheet::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Office Open XML spreadsheet with cell styling
    #[default]
    Xlsx,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of rows
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsheet::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Xlsx.extension(), "xlsx");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["xlsx", "csv", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Xlsx, OutputFormat::Csv, OutputFormat::Json]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsheet::format::OutputFormat;
    /// use std::path::Path;
    ///
    /// let format = OutputFormat::from_path(Path::new("out/chat.JSON")).unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// assert!(OutputFormat::from_path(Path::new("chat")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, ChatsheetError> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatsheetError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }

    /// Cargo feature that compiles this format's serializer in.
    pub fn feature(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx-output",
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xlsx => write!(f, "XLSX"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a sheet to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The sheet cannot be rendered or the file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(sheet: &Sheet, path: &Path, format: OutputFormat) -> Result<(), ChatsheetError> {
    match format {
        #[cfg(feature = "xlsx-output")]
        OutputFormat::Xlsx => crate::core::output::write_xlsx(sheet, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(sheet, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(sheet, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatsheetError::invalid_format(
            "output",
            format!(
                "Output format {} requires the '{}' feature to be enabled",
                format,
                format.feature()
            ),
        )),
    }
}

#[cfg(feature = "cli")]
impl From<crate::cli::OutputFormat> for OutputFormat {
    fn from(format: crate::cli::OutputFormat) -> OutputFormat {
        match format {
            crate::cli::OutputFormat::Xlsx => OutputFormat::Xlsx,
            crate::cli::OutputFormat::Csv => OutputFormat::Csv,
            crate::cli::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("xlsx").unwrap(), OutputFormat::Xlsx);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("jsonl").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Xlsx.to_string(), "XLSX");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("chat.xlsx")).unwrap(),
            OutputFormat::Xlsx
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir.v2/chat.csv")).unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("CHAT.XLSX")).unwrap(),
            OutputFormat::Xlsx
        );

        let err = OutputFormat::from_path(Path::new("chat.txt")).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains(".txt"));
        assert!(OutputFormat::from_path(Path::new("chat")).is_err());
    }

    #[test]
    fn test_format_all() {
        assert_eq!(OutputFormat::all().len(), 3);
        for format in OutputFormat::all() {
            assert!(OutputFormat::all_names().contains(&format.extension()));
        }
    }

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Xlsx);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Xlsx).unwrap();
        assert_eq!(json, "\"xlsx\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_write_to_format_csv() {
        use crate::core::sheet::{CellStyle, Column, SheetBuilder};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.out");
        let mut sheet = Sheet::default();
        sheet.write_cell(0, Column::Body, "hello", CellStyle::Wrapped);

        write_to_format(&sheet, &path, OutputFormat::Csv).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Time;Speaker;Body"));
    }
}
