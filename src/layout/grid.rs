//! Row-wrapping grid used for stat cards, feature boxes and option cards

use super::types::BoundingBox;

/// A fixed-column grid anchored at a top-left origin
///
/// Cells fill left to right and wrap to a new row every `columns` items. A
/// row is as tall as its tallest cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub columns: usize,
    /// Horizontal gap between columns
    pub gap: f64,
    /// Vertical gap between rows
    pub row_gap: f64,
}

impl Grid {
    pub fn new(x: f64, y: f64, width: f64, columns: usize) -> Self {
        Self {
            x,
            y,
            width,
            columns: columns.max(1),
            gap: 0.0,
            row_gap: 0.0,
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_row_gap(mut self, row_gap: f64) -> Self {
        self.row_gap = row_gap;
        self
    }

    /// `(width - total gap) / columns`
    pub fn column_width(&self) -> f64 {
        let total_gap = self.gap * (self.columns - 1) as f64;
        (self.width - total_gap) / self.columns as f64
    }

    /// Number of rows needed for `len` items
    pub fn rows_for(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }

    /// Lay out cells whose content heights are `heights`
    pub fn layout(&self, heights: &[f64]) -> GridLayout {
        let col_width = self.column_width();
        let mut cells = Vec::with_capacity(heights.len());
        let mut row_heights = Vec::with_capacity(self.rows_for(heights.len()));
        let mut top = self.y;

        for row in heights.chunks(self.columns) {
            let row_height = row.iter().copied().fold(0.0, f64::max);
            for (col, _) in row.iter().enumerate() {
                let x = self.x + col as f64 * (col_width + self.gap);
                cells.push(BoundingBox::new(x, top, col_width, row_height));
            }
            row_heights.push(row_height);
            top += row_height + self.row_gap;
        }

        let bottom = if row_heights.is_empty() {
            self.y
        } else {
            top - self.row_gap
        };

        GridLayout {
            cells,
            row_heights,
            bottom,
        }
    }

    /// Lay out `len` cells that all share one height
    pub fn uniform(&self, len: usize, height: f64) -> GridLayout {
        self.layout(&vec![height; len])
    }
}

/// Result of placing cells on a [`Grid`]
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// One box per input item, in input order
    pub cells: Vec<BoundingBox>,
    pub row_heights: Vec<f64>,
    /// Bottom edge of the last row, or the grid origin when empty
    pub bottom: f64,
}

impl GridLayout {
    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }
}
