//! Transcript-to-sheet conversion.
//!
//! [`Converter`] ties a [`LineClassifier`](crate::classifier::LineClassifier)
//! and a [`RowAssembler`] together for one transcript format. Each call
//! starts from a fresh assembler, so converting several transcripts with the
//! same converter never carries a speaker, time or cursor from one file into
//! the next.
//!
//! # Example
//!
//! ```rust
//! use chatsheet::classifier::TranscriptFormat;
//! use chatsheet::convert::Converter;
//! use chatsheet::core::{Column, SheetBuilder};
//!
//! let converter = Converter::new(TranscriptFormat::Inline);
//! let sheet = converter.convert_str("10:15 AM a1: hello there\nhow are you\n");
//!
//! assert_eq!(sheet.read_cell(0, Column::Time), Some("10:15 AM"));
//! assert_eq!(sheet.read_cell(0, Column::Speaker), Some("a1"));
//! assert_eq!(sheet.read_cell(1, Column::Speaker), Some("a1"));
//! assert_eq!(sheet.read_cell(1, Column::Body), Some("how are you"));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classifier::{TranscriptFormat, create_classifier};
use crate::config::ConvertConfig;
use crate::core::assembler::RowAssembler;
use crate::core::sheet::{Sheet, SheetBuilder};
use crate::error::{ChatsheetError, Result, SourceIssue};
use crate::format::OutputFormat;

/// Result of converting one transcript file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The transcript that was read
    pub input: PathBuf,
    /// The file that was written
    pub output: PathBuf,
    /// Number of rows in the written sheet
    pub rows: usize,
}

/// Converts transcripts of one format into sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    format: TranscriptFormat,
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with the default configuration.
    pub fn new(format: TranscriptFormat) -> Self {
        Self::with_config(format, ConvertConfig::default())
    }

    /// Creates a converter with a custom configuration.
    pub fn with_config(format: TranscriptFormat, config: ConvertConfig) -> Self {
        Self { format, config }
    }

    /// The transcript format this converter reads.
    pub fn format(&self) -> TranscriptFormat {
        self.format
    }

    /// The active configuration.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts a sequence of lines (without terminators) into a sheet.
    ///
    /// Lines that classify to nothing are skipped without moving the row
    /// cursor.
    pub fn convert_lines<I>(&self, lines: I) -> Sheet
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let classifier = create_classifier(self.format);
        let sheet = Sheet::new(&self.config.sheet_name, self.config.styles.clone());
        let mut assembler = RowAssembler::new(self.format, sheet);

        let mut line_count = 0usize;
        for line in lines {
            let fragments = classifier.classify(line.as_ref());
            assembler.assemble(&fragments);
            line_count += 1;
        }

        let sheet = assembler.into_sheet();
        debug!(
            format = %self.format,
            lines = line_count,
            rows = sheet.row_count(),
            "conversion finished"
        );
        sheet
    }

    /// Converts transcript text, split on `\n` or `\r\n`.
    pub fn convert_str(&self, content: &str) -> Sheet {
        self.convert_lines(content.lines())
    }

    /// Reads a transcript file.
    ///
    /// The path must name an existing regular file whose extension equals the
    /// configured source extension. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected.
    pub fn read_source(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| {
            let reason = if e.kind() == io::ErrorKind::NotFound {
                SourceIssue::Missing
            } else {
                SourceIssue::Read(e)
            };
            ChatsheetError::unreadable(path, reason)
        })?;

        if !metadata.is_file() {
            return Err(ChatsheetError::unreadable(path, SourceIssue::NotAFile));
        }

        let expected = self.config.source_extension.as_str();
        if path.extension().and_then(|ext| ext.to_str()) != Some(expected) {
            return Err(ChatsheetError::unreadable(
                path,
                SourceIssue::WrongExtension {
                    expected: expected.to_string(),
                },
            ));
        }

        let bytes =
            fs::read(path).map_err(|e| ChatsheetError::unreadable(path, SourceIssue::Read(e)))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Path of the output written for `input`: the same file name with the
    /// format's extension, next to the input.
    pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
        input.with_extension(format.extension())
    }

    /// Reads, converts and writes one transcript.
    ///
    /// Nothing is written when the source is rejected.
    pub fn convert_file(&self, input: &Path, format: OutputFormat) -> Result<Conversion> {
        let content = self.read_source(input)?;
        let sheet = self.convert_str(&content);

        let output = Self::output_path(input, format);
        sheet.serialize(&output)?;

        Ok(Conversion {
            input: input.to_path_buf(),
            output,
            rows: sheet.row_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::{CellStyle, Column};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_convert_inline_transcript() {
        let converter = Converter::new(TranscriptFormat::Inline);
        let sheet = converter.convert_str(
            "10:15 AM a1: hello\n\
             10:16 AM me: hi back\n\
             5 minutes\n\
             a1: are you there\n",
        );

        assert_eq!(sheet.read_cell(0, Column::Time), Some("10:15 AM"));
        assert_eq!(sheet.read_cell(0, Column::Speaker), Some("a1"));
        assert_eq!(sheet.read_cell(0, Column::Body), Some("hello"));
        assert_eq!(sheet.read_cell(1, Column::Speaker), Some("me"));
        assert_eq!(sheet.read_cell(1, Column::Body), Some("hi back"));

        let divider = sheet.cell(2, Column::Body).unwrap();
        assert_eq!(divider.text(), Some("5 minutes"));
        assert_eq!(divider.style, CellStyle::Highlight);
    }

    #[test]
    fn test_convert_header_transcript() {
        let converter = Converter::new(TranscriptFormat::Header);
        let sheet = converter.convert_str(
            "Alice - 3:05 PM\r\n\
             hi everyone\r\n\
             Bob joined the conversation - 3:06 PM\r\n\
             Bob - 3:06 PM\r\n\
             hey\r\n\
             \r\n\
             what's up\r\n",
        );

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.read_cell(0, Column::Time), Some("3:05 PM"));
        assert_eq!(sheet.read_cell(0, Column::Speaker), Some("Alice :"));
        assert_eq!(sheet.read_cell(0, Column::Body), Some("hi everyone"));
        assert_eq!(sheet.read_cell(1, Column::Time), Some("3:06 PM"));
        assert_eq!(sheet.read_cell(1, Column::Speaker), Some("Bob :"));
        assert_eq!(sheet.read_cell(1, Column::Body), Some("hey"));
        assert_eq!(sheet.read_cell(2, Column::Speaker), Some("Bob :"));
        assert_eq!(sheet.read_cell(2, Column::Body), Some("what's up"));
    }

    #[test]
    fn test_converter_does_not_leak_state_between_calls() {
        let converter = Converter::new(TranscriptFormat::Header);
        let _ = converter.convert_str("Alice - 3:05 PM\nhi\n");

        let sheet = converter.convert_str("orphan line\n");
        assert_eq!(sheet.read_cell(0, Column::Speaker), None);
        assert_eq!(sheet.read_cell(0, Column::Body), Some("orphan line"));
        assert_eq!(sheet.row_count(), 1);
    }

    #[test]
    fn test_convert_lines_is_idempotent() {
        let converter = Converter::new(TranscriptFormat::Inline);
        let lines = ["10:15 AM a1: hi", "follow up", "3 minutes", "me: ok"];
        assert_eq!(converter.convert_lines(lines), converter.convert_lines(lines));
    }

    #[test]
    fn test_empty_transcript_gives_empty_sheet() {
        let converter = Converter::new(TranscriptFormat::Inline);
        assert!(converter.convert_str("").is_empty());
        assert!(converter.convert_str("\n\n   \n").is_empty());
    }

    #[test]
    fn test_sheet_uses_config() {
        let config = ConvertConfig::new().with_sheet_name("Standup");
        let converter = Converter::with_config(TranscriptFormat::Inline, config);
        assert_eq!(converter.convert_str("hi").name(), "Standup");
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            Converter::output_path(Path::new("/data/chat.txt"), OutputFormat::Xlsx),
            PathBuf::from("/data/chat.xlsx")
        );
        assert_eq!(
            Converter::output_path(Path::new("notes.v2.txt"), OutputFormat::Csv),
            PathBuf::from("notes.v2.csv")
        );
    }

    #[test]
    fn test_read_source_rejections() {
        let dir = tempdir().unwrap();
        let converter = Converter::new(TranscriptFormat::Inline);

        let missing = converter
            .read_source(&dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(
            missing,
            ChatsheetError::UnreadableSource {
                reason: SourceIssue::Missing,
                ..
            }
        ));

        let not_a_file = converter.read_source(dir.path()).unwrap_err();
        assert!(matches!(
            not_a_file,
            ChatsheetError::UnreadableSource {
                reason: SourceIssue::NotAFile,
                ..
            }
        ));

        let wrong = dir.path().join("chat.log");
        fs::write(&wrong, "hi").unwrap();
        let err = converter.read_source(&wrong).unwrap_err();
        assert!(err.is_skip());
        assert!(matches!(
            err,
            ChatsheetError::UnreadableSource {
                reason: SourceIssue::WrongExtension { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_read_source_extension_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.TXT");
        fs::write(&path, "hi").unwrap();

        let converter = Converter::new(TranscriptFormat::Inline);
        assert!(converter.read_source(&path).unwrap_err().is_skip());
    }

    #[test]
    fn test_read_source_is_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, b"a1: caf\xff\n").unwrap();

        let converter = Converter::new(TranscriptFormat::Inline);
        let content = converter.read_source(&path).unwrap();
        assert_eq!(content, "a1: caf\u{FFFD}\n");
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_convert_file_writes_sibling_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chat.txt");
        fs::write(&input, "10:15 AM a1: hello\nworld\n").unwrap();

        let converter = Converter::new(TranscriptFormat::Inline);
        let conversion = converter.convert_file(&input, OutputFormat::Csv).unwrap();

        assert_eq!(conversion.output, dir.path().join("chat.csv"));
        assert_eq!(conversion.rows, 2);
        let content = fs::read_to_string(&conversion.output).unwrap();
        assert!(content.contains("10:15 AM;a1;hello"));
        assert!(content.contains(";a1;world"));
    }

    #[test]
    fn test_convert_file_skips_without_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("chat.md");
        fs::write(&input, "a1: hi").unwrap();

        let converter = Converter::new(TranscriptFormat::Inline);
        let err = converter.convert_file(&input, OutputFormat::Xlsx).unwrap_err();
        assert!(err.is_skip());
        assert!(!dir.path().join("chat.xlsx").exists());
    }
}
