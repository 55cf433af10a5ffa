//! Row/column grid used to place several barcodes on a page.

use crate::error::RenderError;

/// A4 page size in PostScript points.
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;
/// Blank border kept around the grid.
pub const PAGE_MARGIN: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: u8,
    cols: u8,
}

/// Position of a grid cell, rows counted from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub page: usize,
    pub row: u8,
    pub col: u8,
}

impl Layout {
    pub const fn new(rows: u8, cols: u8) -> Result<Self, RenderError> {
        if rows == 0 || cols == 0 {
            return Err(RenderError::InvalidLayout { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of barcodes fitting on one page.
    #[inline]
    pub const fn per_page(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Pages needed for `count` barcodes. An empty document still has a page.
    pub const fn pages(&self, count: usize) -> usize {
        if count == 0 { 1 } else { count.div_ceil(self.per_page()) }
    }

    /// Cell of the `index`th barcode, filled row by row.
    pub const fn cell(&self, index: usize) -> Cell {
        let per_page = self.per_page();
        let slot = index % per_page;
        Cell {
            page: index / per_page,
            row: (slot / self.cols as usize) as u8,
            col: (slot % self.cols as usize) as u8,
        }
    }

    /// Size of a cell in points.
    pub fn cell_size(&self) -> (f64, f64) {
        (
            (PAGE_WIDTH - 2.0 * PAGE_MARGIN) / self.cols as f64,
            (PAGE_HEIGHT - 2.0 * PAGE_MARGIN) / self.rows as f64,
        )
    }

    /// Bottom-left corner of a cell in PostScript coordinates.
    pub fn origin(&self, cell: Cell) -> (f64, f64) {
        let (w, h) = self.cell_size();
        (
            PAGE_MARGIN + cell.col as f64 * w,
            PAGE_HEIGHT - PAGE_MARGIN - (cell.row as f64 + 1.0) * h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(Layout::new(0, 2), Err(RenderError::InvalidLayout { rows: 0, cols: 2 }));
        assert_eq!(Layout::new(3, 0), Err(RenderError::InvalidLayout { rows: 3, cols: 0 }));
    }

    #[test]
    fn test_cells_row_major() {
        let layout = Layout::new(3, 2).unwrap();
        assert_eq!(layout.per_page(), 6);
        assert_eq!(layout.cell(0), Cell { page: 0, row: 0, col: 0 });
        assert_eq!(layout.cell(1), Cell { page: 0, row: 0, col: 1 });
        assert_eq!(layout.cell(5), Cell { page: 0, row: 2, col: 1 });
        assert_eq!(layout.cell(6), Cell { page: 1, row: 0, col: 0 });
        assert_eq!(layout.pages(0), 1);
        assert_eq!(layout.pages(6), 1);
        assert_eq!(layout.pages(18), 3);
        assert_eq!(layout.pages(19), 4);
    }

    #[test]
    fn test_origin() {
        let layout = Layout::new(1, 1).unwrap();
        assert_eq!(layout.origin(layout.cell(0)), (PAGE_MARGIN, PAGE_MARGIN));
        let layout = Layout::new(2, 1).unwrap();
        let (_, h) = layout.cell_size();
        assert_eq!(layout.origin(layout.cell(0)).1, PAGE_MARGIN + h);
    }
}
