//! Sheet serializers.
//!
//! - [`write_xlsx`] / [`to_xlsx`] - styled spreadsheet, the primary output - requires `xlsx-output`
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output`
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output`
//!
//! Only the spreadsheet carries styling. The CSV and JSON exports keep cell
//! values (JSON also flags divider rows) and are meant for tooling that
//! cannot read `.xlsx`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "xlsx-output", feature = "csv-output"))]
//! # fn main() -> chatsheet::Result<()> {
//! use chatsheet::core::output::{to_csv, write_xlsx};
//! use chatsheet::core::{Column, CellStyle, Sheet, SheetBuilder};
//! use std::path::Path;
//!
//! let mut sheet = Sheet::default();
//! sheet.write_cell(0, Column::Speaker, "a1", CellStyle::Bold);
//! sheet.write_cell(0, Column::Body, "hello", CellStyle::Wrapped);
//!
//! write_xlsx(&sheet, Path::new("chat.xlsx"))?;
//! let csv_string = to_csv(&sheet)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "xlsx-output", feature = "csv-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "xlsx-output")]
mod xlsx_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "xlsx-output")]
pub use xlsx_writer::{to_xlsx, write_xlsx};
