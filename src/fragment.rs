//! Classified pieces of a transcript line.
//!
//! A classifier turns one raw line into zero or more [`Fragment`]s. An empty
//! list means the line matched nothing and must not touch any row state.

/// One classified piece of a transcript line.
///
/// Fragments borrow from the line they were classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment<'a> {
    /// A clock time such as `10:15 AM`
    Time(&'a str),
    /// A speaker name or alias, without any trailing colon
    Speaker(&'a str),
    /// Message text
    Body(&'a str),
    /// The line is an elapsed-time divider such as `5 minutes`.
    ///
    /// Always accompanied by a [`Fragment::Body`] carrying the divider text.
    DividerMarker,
    /// The line announces a participant joining and must be discarded.
    JoinEvent,
}

impl<'a> Fragment<'a> {
    /// Returns the time text if this is a [`Fragment::Time`].
    pub fn as_time(&self) -> Option<&'a str> {
        match *self {
            Fragment::Time(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the speaker text if this is a [`Fragment::Speaker`].
    pub fn as_speaker(&self) -> Option<&'a str> {
        match *self {
            Fragment::Speaker(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the body text if this is a [`Fragment::Body`].
    pub fn as_body(&self) -> Option<&'a str> {
        match *self {
            Fragment::Body(text) => Some(text),
            _ => None,
        }
    }
}

/// Convenience lookups over the fragments produced for a single line.
pub trait FragmentsExt<'a> {
    /// The first time fragment, if any.
    fn time(&self) -> Option<&'a str>;
    /// The first speaker fragment, if any.
    fn speaker(&self) -> Option<&'a str>;
    /// The first body fragment, if any.
    fn body(&self) -> Option<&'a str>;
    /// Whether the line was flagged as a divider.
    fn is_divider(&self) -> bool;
    /// Whether the line is a join announcement.
    fn is_join_event(&self) -> bool;
}

impl<'a> FragmentsExt<'a> for [Fragment<'a>] {
    fn time(&self) -> Option<&'a str> {
        self.iter().find_map(Fragment::as_time)
    }

    fn speaker(&self) -> Option<&'a str> {
        self.iter().find_map(Fragment::as_speaker)
    }

    fn body(&self) -> Option<&'a str> {
        self.iter().find_map(Fragment::as_body)
    }

    fn is_divider(&self) -> bool {
        self.contains(&Fragment::DividerMarker)
    }

    fn is_join_event(&self) -> bool {
        self.contains(&Fragment::JoinEvent)
    }
}
