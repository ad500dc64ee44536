//! Line classifiers for the supported transcript layouts.
//!
//! - [`InlineClassifier`] - time/speaker/text prefixes on one line
//! - [`HeaderClassifier`] - `Name - H:MM AM` header lines followed by text

mod header;
mod inline;

pub use header::HeaderClassifier;
pub use inline::InlineClassifier;

use regex::Regex;

/// Clock time as it appears in transcripts, e.g. `9:05 AM` or `12:30 PM`.
pub(crate) const CLOCK_TIME: &str = "[0-9]{1,2}:[0-9]{2} [AP]M";

/// Runs a whole-line pattern and returns its first capture group (or the
/// whole match when the pattern has no groups), trimmed.
///
/// A match that trims down to nothing counts as no match.
pub(crate) fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    let caps = pattern.captures(line)?;
    let group = caps.get(1).or_else(|| caps.get(0))?;
    let value = group.as_str().trim();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_group_trimmed() {
        let re = Regex::new(r"^x(.+)$").unwrap();
        assert_eq!(capture(&re, "x  value "), Some("value"));
    }

    #[test]
    fn test_capture_whole_match_without_groups() {
        let re = Regex::new(r"^\s*abc\s*$").unwrap();
        assert_eq!(capture(&re, "  abc "), Some("abc"));
    }

    #[test]
    fn test_capture_blank_is_none() {
        let re = Regex::new(r"^x(.+)$").unwrap();
        assert_eq!(capture(&re, "x   "), None);
        assert_eq!(capture(&re, "y"), None);
    }
}
