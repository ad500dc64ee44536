//! Directory-wide conversion.
//!
//! [`convert_directory`] converts every entry of a directory with one
//! [`Converter`]. Entries are visited in path order and each one gets its own
//! [`FileOutcome`]; a bad file never stops the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::convert::{Conversion, Converter};
use crate::error::{ChatsheetError, Result};
use crate::format::OutputFormat;

/// What happened to one directory entry.
#[derive(Debug)]
pub enum FileOutcome {
    /// The transcript was converted and its output written
    Converted(Conversion),
    /// The entry was not a usable transcript; nothing was written
    Skipped {
        path: PathBuf,
        reason: ChatsheetError,
    },
    /// Conversion started but the output could not be produced
    Failed {
        path: PathBuf,
        error: ChatsheetError,
    },
}

impl FileOutcome {
    /// The input path this outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Converted(conversion) => &conversion.input,
            FileOutcome::Skipped { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Per-file outcomes of a batch, in visiting order.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// All outcomes, in the order the files were visited.
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Number of files converted.
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    /// Number of entries skipped.
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Returns `true` if any file failed.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(FileOutcome::is_failed)
    }

    /// Total number of entries visited.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl From<Vec<FileOutcome>> for BatchReport {
    fn from(outcomes: Vec<FileOutcome>) -> Self {
        Self { outcomes }
    }
}

/// Converts one file and classifies the result.
pub fn convert_entry(converter: &Converter, path: &Path, format: OutputFormat) -> FileOutcome {
    match converter.convert_file(path, format) {
        Ok(conversion) => {
            info!(
                input = %conversion.input.display(),
                output = %conversion.output.display(),
                rows = conversion.rows,
                "converted transcript"
            );
            FileOutcome::Converted(conversion)
        }
        Err(reason) if reason.is_skip() => {
            warn!(path = %path.display(), %reason, "skipped file");
            FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason,
            }
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "conversion failed");
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error: err,
            }
        }
    }
}

/// Converts every entry of `dir`.
///
/// Only a failure to list `dir` is returned as an error. Everything that
/// goes wrong with an individual entry is recorded in the report.
///
/// # Example
///
/// ```rust,no_run
/// use chatsheet::batch::convert_directory;
/// use chatsheet::classifier::TranscriptFormat;
/// use chatsheet::convert::Converter;
/// use chatsheet::format::OutputFormat;
/// use std::path::Path;
///
/// let converter = Converter::new(TranscriptFormat::Header);
/// let report = convert_directory(Path::new("transcripts"), &converter, OutputFormat::Xlsx)?;
/// println!("{} converted, {} failed", report.converted(), report.failed());
/// # Ok::<(), chatsheet::ChatsheetError>(())
/// ```
pub fn convert_directory(
    dir: &Path,
    converter: &Converter,
    format: OutputFormat,
) -> Result<BatchReport> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    let outcomes = paths
        .iter()
        .map(|path| convert_entry(converter, path, format))
        .collect();

    Ok(BatchReport { outcomes })
}
