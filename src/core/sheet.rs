//! In-memory spreadsheet model.
//!
//! The row assembler writes through the [`SheetBuilder`] trait and reads
//! cells back to decide whether a speaker still needs to be filled in. The
//! [`Sheet`] type is the standard implementation; it keeps every written
//! cell together with its style tag until it is serialized.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::StyleSet;
use crate::error::Result;
use crate::format::{OutputFormat, write_to_format};

/// The three output columns, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Clock time of the turn
    Time,
    /// Speaker name
    Speaker,
    /// Message text
    Body,
}

impl Column {
    /// Zero-based column index in the sheet.
    pub fn index(self) -> u16 {
        match self {
            Column::Time => 0,
            Column::Speaker => 1,
            Column::Body => 2,
        }
    }

    /// Header label used by tabular exports.
    pub fn label(self) -> &'static str {
        match self {
            Column::Time => "Time",
            Column::Speaker => "Speaker",
            Column::Body => "Body",
        }
    }

    /// All columns in sheet order.
    pub fn all() -> [Column; 3] {
        [Column::Time, Column::Speaker, Column::Body]
    }
}

/// Style tag attached to a written cell.
///
/// Tags are resolved to concrete formatting through the sheet's
/// [`StyleSet`] when the sheet is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    /// No formatting
    #[default]
    Default,
    /// Speaker names
    Bold,
    /// Times
    TopAligned,
    /// Message text
    Wrapped,
    /// Divider lines
    Highlight,
}

/// A written cell. `value` is `None` for a styled blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<String>,
    pub style: CellStyle,
}

impl Cell {
    /// Returns the cell text, treating blank cells as absent.
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// One sheet row: a slot per [`Column`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Option<Cell>; 3],
}

impl Row {
    /// Returns the cell in `column`, if it was ever written.
    pub fn cell(&self, column: Column) -> Option<&Cell> {
        self.cells[usize::from(column.index())].as_ref()
    }

    /// Returns the text in `column`, if any.
    pub fn text(&self, column: Column) -> Option<&str> {
        self.cell(column).and_then(Cell::text)
    }

    fn set(&mut self, column: Column, cell: Cell) {
        self.cells[usize::from(column.index())] = Some(cell);
    }
}

/// Write/read-back surface the row assembler needs from a spreadsheet.
pub trait SheetBuilder {
    /// Writes `text` at (`row`, `column`), creating the cell if needed and
    /// replacing any previous value and style.
    fn write_cell(&mut self, row: u32, column: Column, text: &str, style: CellStyle);

    /// Writes a styled cell that holds no value.
    fn write_blank(&mut self, row: u32, column: Column, style: CellStyle);

    /// Returns the text at (`row`, `column`), or `None` if the cell is unset
    /// or blank.
    fn read_cell(&self, row: u32, column: Column) -> Option<&str>;

    /// Writes the accumulated sheet to `path`. The output format is chosen
    /// from the path's extension.
    fn serialize(&self, path: &Path) -> Result<()>;
}

/// In-memory sheet with a name and the styles used to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    styles: StyleSet,
    rows: BTreeMap<u32, Row>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new("Chat", StyleSet::default())
    }
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            name: name.into(),
            styles,
            rows: BTreeMap::new(),
        }
    }

    /// The worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The styles this sheet is rendered with.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Number of rows that hold at least one cell.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(&index, row)| (index, row))
    }

    /// Returns the row at `index`, if any cell was written to it.
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Returns the cell at (`row`, `column`), if written.
    pub fn cell(&self, row: u32, column: Column) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cell(column))
    }

    /// Writes the sheet in an explicit format, regardless of the path's
    /// extension.
    pub fn save_as(&self, path: &Path, format: OutputFormat) -> Result<()> {
        write_to_format(self, path, format)
    }

    fn put(&mut self, row: u32, column: Column, cell: Cell) {
        self.rows.entry(row).or_default().set(column, cell);
    }
}

impl SheetBuilder for Sheet {
    fn write_cell(&mut self, row: u32, column: Column, text: &str, style: CellStyle) {
        self.put(
            row,
            column,
            Cell {
                value: Some(text.to_string()),
                style,
            },
        );
    }

    fn write_blank(&mut self, row: u32, column: Column, style: CellStyle) {
        self.put(row, column, Cell { value: None, style });
    }

    fn read_cell(&self, row: u32, column: Column) -> Option<&str> {
        self.rows.get(&row).and_then(|r| r.text(column))
    }

    fn serialize(&self, path: &Path) -> Result<()> {
        let format = OutputFormat::from_path(path)?;
        write_to_format(self, path, format)
    }
}
