//! Unified error types for chatsheet.
//!
//! Every fallible operation in the library returns [`ChatsheetError`]. Line
//! classification and row assembly never fail; errors only come from the
//! file boundary (reading a transcript, serializing a sheet).
//!
//! Callers that drive a batch use [`ChatsheetError::is_skip`] to tell a
//! source that was never converted apart from a conversion that failed half
//! way through writing its output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsheet operations.
///
/// # Example
///
/// ```rust
/// use chatsheet::error::Result;
///
/// fn my_function() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsheetError>;

/// The error type for all chatsheet operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsheetError {
    /// An I/O error that is not tied to a particular source or output file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript could not be used as a conversion source.
    ///
    /// No output is produced for such a file.
    #[error("Cannot read source {}: {reason}", path.display())]
    UnreadableSource {
        /// The source path that was rejected
        path: PathBuf,
        /// Why it was rejected
        #[source]
        reason: SourceIssue,
    },

    /// The converted sheet could not be written to disk.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The output path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The spreadsheet container could not be built or saved.
    #[cfg(feature = "xlsx-output")]
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

/// Reasons a transcript is not accepted as a conversion source.
#[derive(Debug, Error)]
pub enum SourceIssue {
    /// Nothing exists at the path
    #[error("file does not exist")]
    Missing,
    /// The path exists but is a directory or special file
    #[error("not a regular file")]
    NotAFile,
    /// The file does not carry the expected transcript extension
    #[error("expected a .{expected} file")]
    WrongExtension {
        /// The configured source extension
        expected: String,
    },
    /// Opening or reading the file failed
    #[error("{0}")]
    Read(#[from] io::Error),
}

impl ChatsheetError {
    /// Creates an unreadable-source error.
    pub fn unreadable(path: impl Into<PathBuf>, reason: SourceIssue) -> Self {
        ChatsheetError::UnreadableSource {
            path: path.into(),
            reason,
        }
    }

    /// Creates an output write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatsheetError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsheetError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the source was skipped and nothing was written.
    pub fn is_skip(&self) -> bool {
        matches!(self, ChatsheetError::UnreadableSource { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsheetError::Io(_) | ChatsheetError::Write { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsheetError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatsheetError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
        assert!(!err.is_skip());
    }

    #[test]
    fn test_unreadable_source_is_skip() {
        let err = ChatsheetError::unreadable(
            "/tmp/chat.log",
            SourceIssue::WrongExtension {
                expected: "txt".into(),
            },
        );
        assert!(err.is_skip());
        assert!(!err.is_io());
        let display = err.to_string();
        assert!(display.contains("/tmp/chat.log"));
        assert!(display.contains(".txt"));
    }

    #[test]
    fn test_unreadable_source_has_reason_as_source() {
        let err = ChatsheetError::unreadable("missing.txt", SourceIssue::Missing);
        let source = err.source().expect("reason is the error source");
        assert_eq!(source.to_string(), "file does not exist");
    }

    #[test]
    fn test_write_error_display() {
        let err = ChatsheetError::write(
            "/out/chat.xlsx",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_io());
        assert!(!err.is_skip());
        let display = err.to_string();
        assert!(display.contains("/out/chat.xlsx"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatsheetError::invalid_format("output", "Unknown file extension: '.doc'");
        assert!(err.is_invalid_format());
        assert_eq!(
            err.to_string(),
            "Invalid output format: Unknown file extension: '.doc'"
        );
    }

    #[test]
    fn test_source_issue_from_io() {
        let issue = SourceIssue::from(io::Error::other("disk gone"));
        assert_eq!(issue.to_string(), "disk gone");
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = ChatsheetError::from(json_err);
        assert!(err.to_string().starts_with("JSON error"));
    }
}
