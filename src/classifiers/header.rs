//! Classifier for header-style transcripts.
//!
//! Speakers are announced on their own line, followed by the lines they
//! wrote:
//!
//! ```text
//! Alice - 3:05 PM
//! hi everyone
//! Bob joined the conversation - 3:06 PM
//! Bob - 3:06 PM
//! hey
//! ```
//!
//! Join announcements are discarded. Anything that is neither a join nor a
//! header is message text, kept exactly as written.

use std::sync::LazyLock;

use regex::Regex;

use super::{CLOCK_TIME, capture};
use crate::classifier::{LineClassifier, TranscriptFormat};
use crate::fragment::Fragment;

static JOIN_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"^[^\s]+ joined the conversation - {CLOCK_TIME}$"
    ))
});

static NEW_SPEAKER: LazyLock<Regex> =
    LazyLock::new(|| compile(format!(r"^[^\s]+ - {CLOCK_TIME}$")));

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("header transcript patterns are valid")
}

/// Classifier for header-style transcripts.
///
/// Exactly one outcome per line, checked in priority order: join event,
/// speaker header, then body text as the fallback.
///
/// # Example
///
/// ```rust
/// use chatsheet::classifier::LineClassifier;
/// use chatsheet::classifiers::HeaderClassifier;
/// use chatsheet::fragment::Fragment;
///
/// let classifier = HeaderClassifier::new();
/// assert_eq!(
///     classifier.classify("Bob joined the conversation - 3:06 PM"),
///     vec![Fragment::JoinEvent]
/// );
/// assert_eq!(classifier.classify("  hi "), vec![Fragment::Body("  hi ")]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderClassifier;

impl HeaderClassifier {
    /// Creates a new header classifier.
    pub fn new() -> Self {
        Self
    }

    /// Splits a `Name - H:MM AM` header into its speaker and time.
    ///
    /// The speaker is everything before the first `-` and the time is the
    /// segment between the first and second `-`.
    fn split_header(header: &str) -> Option<(&str, &str)> {
        let mut parts = header.split('-');
        let name = parts.next()?;
        let time = parts.next()?;
        Some((name.trim(), time.trim()))
    }
}

impl LineClassifier for HeaderClassifier {
    fn name(&self) -> &'static str {
        "Header"
    }

    fn format(&self) -> TranscriptFormat {
        TranscriptFormat::Header
    }

    fn classify<'a>(&self, line: &'a str) -> Vec<Fragment<'a>> {
        if line.trim().is_empty() {
            return Vec::new();
        }
        if JOIN_EVENT.is_match(line) {
            return vec![Fragment::JoinEvent];
        }
        if let Some((name, time)) = capture(&NEW_SPEAKER, line).and_then(Self::split_header) {
            return vec![Fragment::Speaker(name), Fragment::Time(time)];
        }
        vec![Fragment::Body(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Vec<Fragment<'_>> {
        HeaderClassifier::new().classify(line)
    }

    #[test]
    fn test_speaker_header() {
        assert_eq!(
            classify("Alice - 3:05 PM"),
            vec![Fragment::Speaker("Alice"), Fragment::Time("3:05 PM")]
        );
        assert_eq!(
            classify("bob@example.com - 11:59 AM"),
            vec![
                Fragment::Speaker("bob@example.com"),
                Fragment::Time("11:59 AM")
            ]
        );
    }

    #[test]
    fn test_join_event() {
        assert_eq!(
            classify("Bob joined the conversation - 3:06 PM"),
            vec![Fragment::JoinEvent]
        );
    }

    #[test]
    fn test_body_is_untrimmed() {
        assert_eq!(
            classify("   indented reply  "),
            vec![Fragment::Body("   indented reply  ")]
        );
    }

    #[test]
    fn test_name_with_spaces_is_body() {
        assert_eq!(
            classify("Alice Smith - 3:05 PM"),
            vec![Fragment::Body("Alice Smith - 3:05 PM")]
        );
    }

    #[test]
    fn test_header_must_span_whole_line() {
        assert_eq!(
            classify("Alice - 3:05 PM and more"),
            vec![Fragment::Body("Alice - 3:05 PM and more")]
        );
        assert_eq!(
            classify(" Alice - 3:05 PM"),
            vec![Fragment::Body(" Alice - 3:05 PM")]
        );
    }

    #[test]
    fn test_hyphenated_name_keeps_first_two_segments() {
        assert_eq!(
            classify("Jean-Luc - 9:00 AM"),
            vec![Fragment::Speaker("Jean"), Fragment::Time("Luc")]
        );
        assert_eq!(
            classify("Anne-Marie-Claire - 9:00 AM"),
            vec![Fragment::Speaker("Anne"), Fragment::Time("Marie")]
        );
    }

    #[test]
    fn test_inline_style_line_is_body() {
        assert_eq!(
            classify("10:15 AM a1: hello"),
            vec![Fragment::Body("10:15 AM a1: hello")]
        );
    }

    #[test]
    fn test_blank_line_has_no_fragments() {
        assert!(classify("").is_empty());
        assert!(classify("  ").is_empty());
    }
}
