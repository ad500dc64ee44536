//! Line classification for chat transcripts.
//!
//! Two transcript layouts exist in the wild, each with its own classifier:
//!
//! - [`TranscriptFormat::Inline`]: time, speaker alias and text share a line
//!   (`10:15 AM a1: hello there`), and any of them may be omitted.
//! - [`TranscriptFormat::Header`]: a `Name - 3:05 PM` header line introduces
//!   a speaker, followed by one or more plain text lines.
//!
//! Both classifiers implement [`LineClassifier`] and feed the same
//! [`RowAssembler`](crate::core::RowAssembler).
//!
//! # Example
//!
//! ```rust
//! use chatsheet::classifier::{TranscriptFormat, create_classifier};
//! use chatsheet::fragment::Fragment;
//!
//! let classifier = create_classifier(TranscriptFormat::Header);
//! assert_eq!(
//!     classifier.classify("Alice - 3:05 PM"),
//!     vec![Fragment::Speaker("Alice"), Fragment::Time("3:05 PM")]
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::core::assembler::RowRules;
use crate::core::rules::{HeaderRules, InlineRules};
use crate::fragment::Fragment;

/// Supported transcript layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    /// Time, speaker alias and text prefixed on the same line
    #[serde(alias = "v1")]
    Inline,

    /// `Name - H:MM AM` header lines followed by text lines
    #[serde(alias = "v2")]
    Header,
}

impl TranscriptFormat {
    /// Returns all format names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["inline", "v1", "header", "v2"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [TranscriptFormat] {
        &[TranscriptFormat::Inline, TranscriptFormat::Header]
    }

    /// Creates fresh row-transition rules for one conversion in this format.
    pub fn rules(self) -> Box<dyn RowRules> {
        match self {
            TranscriptFormat::Inline => Box::new(InlineRules::new()),
            TranscriptFormat::Header => Box::new(HeaderRules::new()),
        }
    }
}

impl std::fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptFormat::Inline => write!(f, "Inline"),
            TranscriptFormat::Header => write!(f, "Header"),
        }
    }
}

impl std::str::FromStr for TranscriptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inline" | "v1" => Ok(TranscriptFormat::Inline),
            "header" | "v2" => Ok(TranscriptFormat::Header),
            _ => Err(format!(
                "Unknown transcript format: '{}'. Expected one of: {}",
                s,
                TranscriptFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(feature = "cli")]
impl From<crate::cli::Layout> for TranscriptFormat {
    fn from(layout: crate::cli::Layout) -> Self {
        match layout {
            crate::cli::Layout::Inline => TranscriptFormat::Inline,
            crate::cli::Layout::Header => TranscriptFormat::Header,
        }
    }
}

/// Maps a single transcript line to its fragments.
///
/// Classifiers are pure: the same line always yields the same fragments, and
/// no state is carried between lines. Returning an empty list means the line
/// matched nothing.
pub trait LineClassifier: Send + Sync {
    /// Returns the human-readable name of this classifier.
    fn name(&self) -> &'static str;

    /// Returns the transcript format this classifier handles.
    fn format(&self) -> TranscriptFormat;

    /// Classifies one line (without its line terminator).
    fn classify<'a>(&self, line: &'a str) -> Vec<Fragment<'a>>;
}

/// Creates the classifier for the specified transcript format.
pub fn create_classifier(format: TranscriptFormat) -> Box<dyn LineClassifier> {
    match format {
        TranscriptFormat::Inline => Box::new(crate::classifiers::InlineClassifier::new()),
        TranscriptFormat::Header => Box::new(crate::classifiers::HeaderClassifier::new()),
    }
}
