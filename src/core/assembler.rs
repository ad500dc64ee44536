//! Row assembly: turning classified fragments into sheet rows.
//!
//! The [`RowAssembler`] owns the sheet being built and the state shared by
//! both transcript formats (the row cursor and the last speaker seen). The
//! format-specific decisions (when to move to a new row, when to repeat a
//! time, how to fill in a missing speaker) live in a [`RowRules`] strategy
//! chosen per conversion.

use std::fmt;

use crate::classifier::TranscriptFormat;
use crate::core::sheet::SheetBuilder;
use crate::fragment::Fragment;

/// State shared by every row-transition strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    /// Index of the row currently receiving writes. Never decreases.
    pub cursor: u32,
    /// Most recently observed speaker, carried forward across rows.
    pub last_speaker: Option<String>,
}

impl RowState {
    /// Creates the state for a fresh conversion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to the next row.
    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Records `speaker` as the last speaker seen.
    pub fn remember_speaker(&mut self, speaker: &str) {
        self.last_speaker = Some(speaker.to_string());
    }
}

/// Per-format row transition rules.
///
/// Implementations receive the fragments of one non-empty line, in the
/// order the classifier produced them, and issue the cell writes for it.
pub trait RowRules: Send + fmt::Debug {
    /// Applies one line's fragments to the sheet.
    fn apply(
        &mut self,
        fragments: &[Fragment<'_>],
        state: &mut RowState,
        sheet: &mut dyn SheetBuilder,
    );
}

/// Stateful consumer of classified lines.
///
/// # Example
///
/// ```rust
/// use chatsheet::classifier::{TranscriptFormat, create_classifier};
/// use chatsheet::core::{Column, RowAssembler, Sheet, SheetBuilder};
///
/// let classifier = create_classifier(TranscriptFormat::Header);
/// let mut assembler = RowAssembler::new(TranscriptFormat::Header, Sheet::default());
///
/// for line in ["Alice - 3:05 PM", "hi everyone"] {
///     assembler.assemble(&classifier.classify(line));
/// }
///
/// assert_eq!(assembler.cursor(), 1);
/// let sheet = assembler.into_sheet();
/// assert_eq!(sheet.read_cell(0, Column::Speaker), Some("Alice :"));
/// assert_eq!(sheet.read_cell(0, Column::Body), Some("hi everyone"));
/// ```
#[derive(Debug)]
pub struct RowAssembler<S> {
    rules: Box<dyn RowRules>,
    state: RowState,
    sheet: S,
}

impl<S: SheetBuilder> RowAssembler<S> {
    /// Creates an assembler using the rules for `format`.
    pub fn new(format: TranscriptFormat, sheet: S) -> Self {
        Self::with_rules(format.rules(), sheet)
    }

    /// Creates an assembler with explicit rules.
    pub fn with_rules(rules: Box<dyn RowRules>, sheet: S) -> Self {
        Self {
            rules,
            state: RowState::new(),
            sheet,
        }
    }

    /// Consumes the fragments of one line.
    ///
    /// A line without fragments leaves the cursor, the remembered state and
    /// the sheet untouched.
    pub fn assemble(&mut self, fragments: &[Fragment<'_>]) {
        if fragments.is_empty() {
            return;
        }
        self.rules.apply(fragments, &mut self.state, &mut self.sheet);
    }

    /// Index of the row currently receiving writes.
    pub fn cursor(&self) -> u32 {
        self.state.cursor
    }

    /// The last speaker seen so far.
    pub fn last_speaker(&self) -> Option<&str> {
        self.state.last_speaker.as_deref()
    }

    /// The shared row state.
    pub fn state(&self) -> &RowState {
        &self.state
    }

    /// The sheet being built.
    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    /// Finishes assembly and returns the sheet.
    pub fn into_sheet(self) -> S {
        self.sheet
    }
}
