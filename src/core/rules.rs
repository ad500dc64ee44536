//! Row transition rules for the two transcript formats.
//!
//! - [`InlineRules`]: time, speaker and text each move to a new row when the
//!   current row already holds that kind of content (or later content).
//!   Several of them may arrive on one line.
//! - [`HeaderRules`]: a speaker header fills the row about to be written,
//!   and every text line closes the current row.

use crate::core::assembler::{RowRules, RowState};
use crate::core::sheet::{CellStyle, Column, SheetBuilder};
use crate::fragment::{Fragment, FragmentsExt};

/// Appended to speaker names in header-style transcripts.
pub const SPEAKER_SUFFIX: &str = " :";

/// Kind of content most recently written by [`InlineRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Time,
    Name,
    Text,
}

/// Transition rules for inline-prefix transcripts.
#[derive(Debug, Clone, Default)]
pub struct InlineRules {
    last_element: Option<ElementKind>,
}

impl InlineRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// What was written last, if anything.
    pub fn last_element(&self) -> Option<ElementKind> {
        self.last_element
    }

    /// Fills the speaker cell of the current row from the last speaker seen.
    ///
    /// An unset cell is always filled, even when no speaker is known yet (the
    /// cell is then written blank). A cell holding only whitespace is filled
    /// only when a speaker is known.
    fn backfill_speaker(state: &RowState, sheet: &mut dyn SheetBuilder) {
        let needs_speaker = match sheet.read_cell(state.cursor, Column::Speaker) {
            None => true,
            Some(text) => text.trim().is_empty() && state.last_speaker.is_some(),
        };
        if !needs_speaker {
            return;
        }
        match state.last_speaker.as_deref() {
            Some(name) => sheet.write_cell(state.cursor, Column::Speaker, name, CellStyle::Bold),
            None => sheet.write_blank(state.cursor, Column::Speaker, CellStyle::Bold),
        }
    }
}

impl RowRules for InlineRules {
    fn apply(
        &mut self,
        fragments: &[Fragment<'_>],
        state: &mut RowState,
        sheet: &mut dyn SheetBuilder,
    ) {
        if let Some(time) = fragments.time() {
            if self.last_element.is_some() {
                state.advance();
            }
            sheet.write_cell(state.cursor, Column::Time, time, CellStyle::TopAligned);
            self.last_element = Some(ElementKind::Time);
        }

        if let Some(speaker) = fragments.speaker() {
            if matches!(
                self.last_element,
                Some(ElementKind::Name | ElementKind::Text)
            ) {
                state.advance();
            }
            state.remember_speaker(speaker);
            sheet.write_cell(state.cursor, Column::Speaker, speaker, CellStyle::Bold);
            self.last_element = Some(ElementKind::Name);
        }

        if let Some(body) = fragments.body() {
            if self.last_element == Some(ElementKind::Text) {
                state.advance();
            }
            let style = if fragments.is_divider() {
                CellStyle::Highlight
            } else {
                CellStyle::Wrapped
            };
            sheet.write_cell(state.cursor, Column::Body, body, style);
            self.last_element = Some(ElementKind::Text);
        }

        Self::backfill_speaker(state, sheet);
    }
}

/// Transition rules for header-style transcripts.
#[derive(Debug, Clone, Default)]
pub struct HeaderRules {
    last_time: Option<String>,
}

impl HeaderRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last time written to the sheet.
    pub fn last_time(&self) -> Option<&str> {
        self.last_time.as_deref()
    }
}

impl RowRules for HeaderRules {
    fn apply(
        &mut self,
        fragments: &[Fragment<'_>],
        state: &mut RowState,
        sheet: &mut dyn SheetBuilder,
    ) {
        if fragments.is_join_event() {
            return;
        }

        if let Some(speaker) = fragments.speaker() {
            // Consecutive turns within the same minute show the time once.
            if let Some(time) = fragments.time() {
                if self.last_time.as_deref() != Some(time) {
                    self.last_time = Some(time.to_string());
                    sheet.write_cell(state.cursor, Column::Time, time, CellStyle::TopAligned);
                }
            }
            state.remember_speaker(speaker);
            let label = format!("{speaker}{SPEAKER_SUFFIX}");
            sheet.write_cell(state.cursor, Column::Speaker, &label, CellStyle::Bold);
            return;
        }

        if let Some(body) = fragments.body() {
            let speaker_blank = sheet
                .read_cell(state.cursor, Column::Speaker)
                .is_none_or(|text| text.trim().is_empty());
            if speaker_blank {
                if let Some(name) = state.last_speaker.as_deref() {
                    let label = format!("{name}{SPEAKER_SUFFIX}");
                    sheet.write_cell(state.cursor, Column::Speaker, &label, CellStyle::Bold);
                }
            }
            sheet.write_cell(state.cursor, Column::Body, body, CellStyle::Wrapped);
            state.advance();
        }
    }
}
