//! XLSX output writer.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use crate::config::{CellFormat, StyleSet};
use crate::core::sheet::{CellStyle, Column, Sheet};
use crate::error::{ChatsheetError, Result};

/// Resolved spreadsheet formats, one per style tag.
struct Formats {
    default: Format,
    bold: Format,
    top_aligned: Format,
    wrapped: Format,
    highlight: Format,
}

impl Formats {
    fn new(styles: &StyleSet) -> Self {
        Self {
            default: build_format(styles.format(CellStyle::Default)),
            bold: build_format(styles.format(CellStyle::Bold)),
            top_aligned: build_format(styles.format(CellStyle::TopAligned)),
            wrapped: build_format(styles.format(CellStyle::Wrapped)),
            highlight: build_format(styles.format(CellStyle::Highlight)),
        }
    }

    fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Default => &self.default,
            CellStyle::Bold => &self.bold,
            CellStyle::TopAligned => &self.top_aligned,
            CellStyle::Wrapped => &self.wrapped,
            CellStyle::Highlight => &self.highlight,
        }
    }
}

fn build_format(cell: &CellFormat) -> Format {
    let mut format = Format::new();
    if cell.bold {
        format = format.set_bold();
    }
    if cell.align_top {
        format = format.set_align(FormatAlign::Top);
    }
    if cell.wrap_text {
        format = format.set_text_wrap();
    }
    if let Some(rgb) = cell.font_color {
        format = format.set_font_color(Color::RGB(rgb));
    }
    format
}

/// Writes the sheet as a single-worksheet `.xlsx` file.
///
/// # Format
/// - One worksheet named after the sheet
/// - Columns: Time, Speaker, Body (no header row)
/// - Body column widened to `StyleSet::body_column_width`
/// - Cell formatting from the sheet's [`StyleSet`]
pub fn write_xlsx(sheet: &Sheet, output_path: &Path) -> Result<()> {
    let bytes = to_xlsx(sheet)?;
    fs::write(output_path, bytes).map_err(|e| ChatsheetError::write(output_path, e))
}

/// Renders the sheet to `.xlsx` bytes without touching the file system.
pub fn to_xlsx(sheet: &Sheet) -> Result<Vec<u8>> {
    let formats = Formats::new(sheet.styles());
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name())?;
    worksheet.set_column_width(Column::Body.index(), sheet.styles().body_column_width)?;

    for (index, row) in sheet.rows() {
        for column in Column::all() {
            let Some(cell) = row.cell(column) else {
                continue;
            };
            let format = formats.get(cell.style);
            match cell.text() {
                Some(text) => {
                    worksheet.write_string_with_format(index, column.index(), text, format)?;
                }
                None => {
                    worksheet.write_blank(index, column.index(), format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
