//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::sheet::{CellStyle, Column, Row, Sheet};
use crate::error::{ChatsheetError, Result};

/// One sheet row as exported to JSON. Unset cells are omitted.
#[derive(Serialize)]
struct JsonRow<'a> {
    row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speaker: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    divider: bool,
}

impl<'a> JsonRow<'a> {
    fn from_row(index: u32, row: &'a Row) -> Self {
        Self {
            row: index,
            time: row.text(Column::Time),
            speaker: row.text(Column::Speaker),
            body: row.text(Column::Body),
            divider: row
                .cell(Column::Body)
                .is_some_and(|cell| cell.style == CellStyle::Highlight),
        }
    }
}

fn json_rows(sheet: &Sheet) -> Vec<JsonRow<'_>> {
    sheet
        .rows()
        .map(|(index, row)| JsonRow::from_row(index, row))
        .collect()
}

/// Writes the sheet to a JSON file as an array of rows.
///
/// # Format
/// ```json
/// [
///   {"row": 0, "time": "3:05 PM", "speaker": "Alice :", "body": "hi"},
///   {"row": 1, "body": "5 minutes", "divider": true}
/// ]
/// ```
pub fn write_json(sheet: &Sheet, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| ChatsheetError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &json_rows(sheet))?;
    writer
        .flush()
        .map_err(|e| ChatsheetError::write(output_path, e))?;
    Ok(())
}

/// Converts the sheet to a JSON string.
pub fn to_json(sheet: &Sheet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_rows(sheet))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::SheetBuilder;

    #[test]
    fn test_to_json_rows() {
        let mut sheet = Sheet::default();
        sheet.write_cell(0, Column::Time, "10:15 AM", CellStyle::TopAligned);
        sheet.write_cell(0, Column::Speaker, "a1", CellStyle::Bold);
        sheet.write_cell(0, Column::Body, "hello", CellStyle::Wrapped);
        sheet.write_blank(1, Column::Speaker, CellStyle::Bold);
        sheet.write_cell(1, Column::Body, "5 minutes", CellStyle::Highlight);

        let json = to_json(&sheet).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0]["row"], 0);
        assert_eq!(rows[0]["time"], "10:15 AM");
        assert_eq!(rows[0]["speaker"], "a1");
        assert_eq!(rows[0]["body"], "hello");
        assert!(rows[0].get("divider").is_none());

        assert_eq!(rows[1]["body"], "5 minutes");
        assert_eq!(rows[1]["divider"], true);
        assert!(rows[1].get("speaker").is_none());
        assert!(rows[1].get("time").is_none());
    }

    #[test]
    fn test_to_json_empty_sheet() {
        assert_eq!(to_json(&Sheet::default()).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        let mut sheet = Sheet::default();
        sheet.write_cell(0, Column::Body, "hi", CellStyle::Wrapped);

        write_json(&sheet, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"body\": \"hi\""));
    }
}
