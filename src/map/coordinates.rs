//! Conversion between grid space and map space
//!
//! Grid space is `(row, col)` with row 0 at the top. Map space is `(x, y)`
//! as written in map documents. Every position that crosses between the two
//! goes through [`MapFrame`], so signs, decorations and visibility agree.

use crate::math::region::Point;

/// Coordinate frame of a map with a fixed number of rows and columns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapFrame {
    rows: usize,
    cols: usize,
}

impl MapFrame {
    /// Frame for a `rows` x `cols` map
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    fn offset(self) -> f64 {
        self.rows as f64 - self.cols as f64 + 1.0
    }

    /// Grid point to map `(x, y)`
    pub fn to_map(self, (row, col): Point) -> (f64, f64) {
        (col, row - self.offset())
    }

    /// Map `(x, y)` to grid point, the exact inverse of [`MapFrame::to_map`]
    pub fn to_grid(self, (x, y): (f64, f64)) -> Point {
        (y + self.offset(), x)
    }

    /// Map position of the center of a cell
    pub fn cell_center(self, [row, col]: [usize; 2]) -> (f64, f64) {
        self.to_map((row as f64 + 0.5, col as f64 + 0.5))
    }
}
