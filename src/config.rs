//! Configuration types for conversions and sheet styling.
//!
//! These are plain structs with builder methods and no CLI dependencies.
//! A [`StyleSet`] is built once per conversion and handed to the
//! [`Sheet`](crate::core::Sheet), so two conversions never share mutable
//! styling state.
//!
//! # Example
//!
//! ```rust
//! use chatsheet::config::{ConvertConfig, StyleSet};
//!
//! let config = ConvertConfig::new()
//!     .with_source_extension("log")
//!     .with_sheet_name("Standup")
//!     .with_styles(StyleSet::default().with_body_column_width(100.0));
//!
//! assert_eq!(config.source_extension, "log");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::sheet::CellStyle;

/// Width of the body column in character units (20000 / 256).
pub const DEFAULT_BODY_COLUMN_WIDTH: f64 = 78.13;

/// Red, used for elapsed-time dividers.
pub const DIVIDER_COLOR: u32 = 0xFF0000;

/// Visual attributes applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellFormat {
    /// Bold font
    pub bold: bool,
    /// Vertically align to the top of the cell
    pub align_top: bool,
    /// Wrap long text within the column width
    pub wrap_text: bool,
    /// Font color as `0xRRGGBB`
    pub font_color: Option<u32>,
}

impl CellFormat {
    /// Creates a plain format.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn align_top(mut self) -> Self {
        self.align_top = true;
        self
    }

    #[must_use]
    pub fn wrap_text(mut self) -> Self {
        self.wrap_text = true;
        self
    }

    #[must_use]
    pub fn font_color(mut self, rgb: u32) -> Self {
        self.font_color = Some(rgb);
        self
    }

    /// Returns `true` if no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Formats for each [`CellStyle`] tag plus sheet layout settings.
///
/// The defaults reproduce the classic transcript sheet: bold, top-aligned
/// speaker names, top-aligned times, wrapped message text and red dividers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSet {
    /// Format for [`CellStyle::Default`]
    pub default: CellFormat,
    /// Format for [`CellStyle::Bold`] (speaker names)
    pub bold: CellFormat,
    /// Format for [`CellStyle::TopAligned`] (times)
    pub top_aligned: CellFormat,
    /// Format for [`CellStyle::Wrapped`] (message text)
    pub wrapped: CellFormat,
    /// Format for [`CellStyle::Highlight`] (divider lines)
    pub highlight: CellFormat,
    /// Width of the body column in character units
    pub body_column_width: f64,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            default: CellFormat::new(),
            bold: CellFormat::new().bold().align_top(),
            top_aligned: CellFormat::new().align_top(),
            wrapped: CellFormat::new().wrap_text(),
            highlight: CellFormat::new().font_color(DIVIDER_COLOR),
            body_column_width: DEFAULT_BODY_COLUMN_WIDTH,
        }
    }
}

impl StyleSet {
    /// Returns the format for a style tag.
    pub fn format(&self, style: CellStyle) -> &CellFormat {
        match style {
            CellStyle::Default => &self.default,
            CellStyle::Bold => &self.bold,
            CellStyle::TopAligned => &self.top_aligned,
            CellStyle::Wrapped => &self.wrapped,
            CellStyle::Highlight => &self.highlight,
        }
    }

    /// Sets the body column width.
    #[must_use]
    pub fn with_body_column_width(mut self, width: f64) -> Self {
        self.body_column_width = width;
        self
    }

    /// Sets the divider font color.
    #[must_use]
    pub fn with_highlight_color(mut self, rgb: u32) -> Self {
        self.highlight = self.highlight.font_color(rgb);
        self
    }
}

/// Configuration for converting transcript files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Extension a source file must carry, without the dot (default: `txt`)
    pub source_extension: String,

    /// Name of the single worksheet (default: `Chat`)
    pub sheet_name: String,

    /// Styling applied when the sheet is serialized
    pub styles: StyleSet,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_extension: "txt".to_string(),
            sheet_name: "Chat".to_string(),
            styles: StyleSet::default(),
        }
    }
}

impl ConvertConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected source extension. A leading dot is ignored.
    #[must_use]
    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.source_extension = extension
            .strip_prefix('.')
            .map(str::to_string)
            .unwrap_or(extension);
        self
    }

    /// Sets the worksheet name.
    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Sets the style set.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.styles = styles;
        self
    }
}
