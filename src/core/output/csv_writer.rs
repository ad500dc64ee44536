//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::sheet::{Column, Sheet};
use crate::error::{ChatsheetError, Result};

/// Writes the sheet to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: `Time;Speaker;Body`
/// - One record per sheet row, in row order; unset cells are empty
/// - Encoding: UTF-8
pub fn write_csv(sheet: &Sheet, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| ChatsheetError::write(output_path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_records(sheet, &mut writer)?;

    writer
        .flush()
        .map_err(|e| ChatsheetError::write(output_path, e))?;
    Ok(())
}

/// Converts the sheet to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(sheet: &Sheet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(sheet, &mut writer)?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: Write>(sheet: &Sheet, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(Column::all().map(Column::label))?;

    for (_, row) in sheet.rows() {
        writer.write_record(Column::all().map(|column| row.text(column).unwrap_or_default()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::{CellStyle, SheetBuilder};
    use tempfile::NamedTempFile;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::default();
        sheet.write_cell(0, Column::Time, "3:05 PM", CellStyle::TopAligned);
        sheet.write_cell(0, Column::Speaker, "Alice :", CellStyle::Bold);
        sheet.write_cell(0, Column::Body, "hi everyone", CellStyle::Wrapped);
        sheet.write_cell(1, Column::Speaker, "Alice :", CellStyle::Bold);
        sheet.write_cell(1, Column::Body, "one; two", CellStyle::Wrapped);
        sheet
    }

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&sample_sheet()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Time;Speaker;Body");
        assert_eq!(lines[1], "3:05 PM;Alice :;hi everyone");
        assert_eq!(lines[2], ";Alice :;\"one; two\"");
    }

    #[test]
    fn test_to_csv_empty_sheet_has_header_only() {
        let csv = to_csv(&Sheet::default()).unwrap();
        assert_eq!(csv.trim_end(), "Time;Speaker;Body");
    }

    #[test]
    fn test_write_csv_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&sample_sheet(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Time;Speaker;Body"));
        assert!(content.contains("hi everyone"));
    }
}
