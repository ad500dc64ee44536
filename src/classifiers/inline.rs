//! Classifier for inline-prefix transcripts.
//!
//! Every line may carry any combination of a clock time, a short speaker
//! alias and message text:
//!
//! ```text
//! 10:15 AM a1: hello there
//! a2: hi
//! still typing on the same turn
//! 5 minutes
//! 10:21 AM me: back again
//! ```
//!
//! Speaker aliases are a letter followed by a digit (`a1`, `B7`) or the
//! literal `me`, each terminated by a colon. A divider line (`5 minutes`)
//! marks elapsed time and is flagged so it can be highlighted.

use std::sync::LazyLock;

use regex::Regex;

use super::{CLOCK_TIME, capture};
use crate::classifier::{LineClassifier, TranscriptFormat};
use crate::fragment::Fragment;

const SPEAKER_ALIAS: &str = "[a-zA-Z][0-9]|[mM][eE]";

static DIVIDER: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*[0-9]+ minutes*\s*$".into()));

static TIME: LazyLock<Regex> = LazyLock::new(|| compile(format!(r"^\s*({CLOCK_TIME}).*$")));

static SPEAKER: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^\s*(?:{CLOCK_TIME})?\s*({SPEAKER_ALIAS}):.+$"
    ))
});

static BODY: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^\s*(?:{CLOCK_TIME})?\s*(?:(?:{SPEAKER_ALIAS}):)?(.+)$"
    ))
});

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("inline transcript patterns are valid")
}

/// Classifier for inline-prefix transcripts.
///
/// All four checks (divider, time, speaker, body) run independently, so one
/// line can yield several fragments. They are always returned in the order
/// divider, time, speaker, body.
///
/// # Example
///
/// ```rust
/// use chatsheet::classifier::LineClassifier;
/// use chatsheet::classifiers::InlineClassifier;
/// use chatsheet::fragment::Fragment;
///
/// let classifier = InlineClassifier::new();
/// assert_eq!(
///     classifier.classify("10:15 AM a1: hello there"),
///     vec![
///         Fragment::Time("10:15 AM"),
///         Fragment::Speaker("a1"),
///         Fragment::Body("hello there"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineClassifier;

impl InlineClassifier {
    /// Creates a new inline classifier.
    pub fn new() -> Self {
        Self
    }

    /// Whether the line is an elapsed-time divider such as `5 minutes`.
    pub fn is_divider(line: &str) -> bool {
        DIVIDER.is_match(line)
    }
}

impl LineClassifier for InlineClassifier {
    fn name(&self) -> &'static str {
        "Inline"
    }

    fn format(&self) -> TranscriptFormat {
        TranscriptFormat::Inline
    }

    fn classify<'a>(&self, line: &'a str) -> Vec<Fragment<'a>> {
        let mut fragments = Vec::with_capacity(4);

        if Self::is_divider(line) {
            fragments.push(Fragment::DividerMarker);
        }
        if let Some(time) = capture(&TIME, line) {
            fragments.push(Fragment::Time(time));
        }
        if let Some(speaker) = capture(&SPEAKER, line) {
            fragments.push(Fragment::Speaker(speaker));
        }
        if let Some(body) = capture(&BODY, line) {
            fragments.push(Fragment::Body(body));
        }

        fragments
    }
}
