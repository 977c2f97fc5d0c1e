//! Column geometry shared by a table header and its body rows.
//!
//! Every cell stores its content-box width plus, when readable, the computed
//! box style it is laid out with. Widths are only ever written per column
//! index, across the header and every body row at once, so header and body
//! stay aligned.

use serde::{Deserialize, Serialize};

/// Box model used to interpret a cell width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxSizing {
    /// Padding is added on top of the width
    #[default]
    ContentBox,
    /// Padding is included in the width
    BorderBox,
}

/// Computed style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellStyle {
    pub box_sizing: BoxSizing,
    pub padding_left: f32,
    pub padding_right: f32,
}

impl CellStyle {
    pub fn content_box(padding_left: f32, padding_right: f32) -> Self {
        Self {
            box_sizing: BoxSizing::ContentBox,
            padding_left,
            padding_right,
        }
    }

    pub fn border_box(padding_left: f32, padding_right: f32) -> Self {
        Self {
            box_sizing: BoxSizing::BorderBox,
            padding_left,
            padding_right,
        }
    }
}

/// A single header or body cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    width: f32,
    /// `None` when the computed style could not be read
    style: Option<CellStyle>,
}

impl CellBox {
    pub fn new(width: f32) -> Self {
        Self { width, style: None }
    }

    pub fn with_style(width: f32, style: CellStyle) -> Self {
        Self {
            width,
            style: Some(style),
        }
    }

    /// Width as applied to the cell.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> Option<CellStyle> {
        self.style
    }

    /// Width the cell occupies on screen, padding included.
    pub fn offset_width(&self) -> f32 {
        match self.style {
            Some(style) if style.box_sizing == BoxSizing::ContentBox => {
                self.width + style.padding_left + style.padding_right
            }
            _ => self.width,
        }
    }

    /// Left inset of the cell content.
    pub fn padding_left(&self) -> f32 {
        self.style.map(|s| s.padding_left).unwrap_or(0.0)
    }

    pub fn padding_right(&self) -> f32 {
        self.style.map(|s| s.padding_right).unwrap_or(0.0)
    }
}

/// Amount to subtract from a measured width to get the width to apply.
///
/// Zero for border-box cells and for cells whose style is unknown; otherwise
/// left plus right padding.
pub fn padding_diff(cell: &CellBox) -> f32 {
    match cell.style {
        Some(style) if style.box_sizing == BoxSizing::ContentBox => {
            style.padding_left + style.padding_right
        }
        _ => 0.0,
    }
}

/// Header row plus body rows of a table.
#[derive(Debug, Clone, Default)]
pub struct TableLayout {
    header: Vec<CellBox>,
    rows: Vec<Vec<CellBox>>,
}

impl TableLayout {
    /// Creates a table with the given header cells and no body rows.
    pub fn new(header: Vec<CellBox>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> &[CellBox] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<CellBox>] {
        &self.rows
    }

    pub fn header_cell(&self, column: usize) -> Option<&CellBox> {
        self.header.get(column)
    }

    pub fn column_width(&self, column: usize) -> Option<f32> {
        self.header.get(column).map(CellBox::width)
    }

    /// Total on-screen width of one row.
    pub fn total_offset_width(&self) -> f32 {
        self.header.iter().map(CellBox::offset_width).sum()
    }

    /// Resizes the body to `count` rows.
    ///
    /// Rows added here copy the header cells, so they start aligned with it.
    pub fn sync_rows(&mut self, count: usize) {
        if count < self.rows.len() {
            self.rows.truncate(count);
        } else {
            let template = self.header.clone();
            self.rows.resize(count, template);
        }
    }

    /// Writes `width` to column `column` of the header and of every body row.
    pub(crate) fn set_column_width(&mut self, column: usize, width: f32) {
        let Some(cell) = self.header.get_mut(column) else {
            return;
        };
        cell.width = width;
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(column) {
                cell.width = width;
            }
        }
    }

    /// Whether every body cell has the width of the header cell above it.
    pub fn is_aligned(&self) -> bool {
        self.rows.iter().all(|row| {
            row.iter()
                .zip(&self.header)
                .all(|(cell, head)| cell.width == head.width)
        })
    }
}
