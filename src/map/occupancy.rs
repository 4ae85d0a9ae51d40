//! Validated road/not-road bitmaps
//!
//! Raw input arrives as bytes where 0 is empty and 255 is road. Shape and
//! values are checked once here, before any per-cell work, so the classifier
//! only ever sees a well-formed boolean grid.

use ndarray::Array2;

use crate::io::error::{MapError, Result};
use crate::spatial::direction::Direction;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileCatalog;

/// Byte value of an empty cell
pub const EMPTY: u8 = 0;
/// Byte value of a road cell
pub const ROAD: u8 = 255;

/// Side length, in bitmap cells, of one rendered solver tile
pub const RENDER_BLOCK: usize = 3;

/// Read-only view of a painted grid supplied by an editor or image
pub trait BitmapSurface {
    /// Grid size as (rows, cols)
    fn size(&self) -> (usize, usize);

    /// Raw byte at a cell; only called with in-bounds coordinates
    fn value(&self, row: usize, col: usize) -> u8;
}

impl BitmapSurface for Array2<u8> {
    fn size(&self) -> (usize, usize) {
        self.dim()
    }

    fn value(&self, row: usize, col: usize) -> u8 {
        self.get([row, col]).copied().unwrap_or(EMPTY)
    }
}

/// Rectangular boolean grid, `true` where there is road
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
}

impl OccupancyGrid {
    /// Wrap an already boolean grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no rows or no columns
    pub fn new(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(MalformedGridReason::Empty.into());
        }
        Ok(Self { cells })
    }

    /// Validate rows of 0/255 bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows, or the first row is empty
    /// - Rows differ in length
    /// - Any value is neither 0 nor 255
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MalformedGridReason::Empty.into());
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MalformedGridReason::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
        }

        let mut cells = Array2::from_elem((rows.len(), cols), false);
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, &value) in row.iter().enumerate() {
                let occupied = decode(value, [row_index, col_index])?;
                if let Some(cell) = cells.get_mut([row_index, col_index]) {
                    *cell = occupied;
                }
            }
        }
        Ok(Self { cells })
    }

    /// Validate any painted surface
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is empty or holds a value other than
    /// 0 or 255
    pub fn from_surface(surface: &impl BitmapSurface) -> Result<Self> {
        let (rows, cols) = surface.size();
        if rows == 0 || cols == 0 {
            return Err(MalformedGridReason::Empty.into());
        }

        let mut cells = Array2::from_elem((rows, cols), false);
        for row in 0..rows {
            for col in 0..cols {
                let occupied = decode(surface.value(row, col), [row, col])?;
                if let Some(cell) = cells.get_mut([row, col]) {
                    *cell = occupied;
                }
            }
        }
        Ok(Self { cells })
    }

    /// Render a collapsed solver grid as road bitmap
    ///
    /// Each tile becomes a 3x3 block: the center is road when any side is,
    /// the middle of each road side is road, corners stay empty. Adjacent
    /// consistent tiles therefore join into continuous roads.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid refers to a tile missing from the catalog
    pub fn from_tile_grid(grid: &TileGrid, catalog: &TileCatalog) -> Result<Self> {
        let (height, width) = grid.tiles.dim();
        let mut cells = Array2::from_elem((height * RENDER_BLOCK, width * RENDER_BLOCK), false);

        for ((row, col), &index) in grid.tiles.indexed_iter() {
            let tile = catalog.get(index).ok_or(MapError::InvalidParameter {
                parameter: "tile",
                value: index.to_string(),
                reason: format!("catalog has {} tiles", catalog.len()),
            })?;
            let center = [row * RENDER_BLOCK + 1, col * RENDER_BLOCK + 1];

            if tile.sides().road_count() > 0 {
                if let Some(cell) = cells.get_mut(center) {
                    *cell = true;
                }
            }
            for direction in Direction::ALL {
                if !tile.sides().is_road(direction) {
                    continue;
                }
                let target = direction.step(center, cells.nrows(), cells.ncols());
                if let Some(cell) = target.and_then(|location| cells.get_mut(location)) {
                    *cell = true;
                }
            }
        }
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether a location holds road; out of bounds is empty
    pub fn is_road(&self, location: [usize; 2]) -> bool {
        self.cells.get(location).copied().unwrap_or(false)
    }

    /// Underlying boolean grid
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Back to 0/255 bytes
    pub fn to_bytes(&self) -> Array2<u8> {
        self.cells.map(|&road| if road { ROAD } else { EMPTY })
    }
}

fn decode(value: u8, location: [usize; 2]) -> Result<bool> {
    match value {
        EMPTY => Ok(false),
        ROAD => Ok(true),
        _ => Err(MapError::InvalidOccupancy { location, value }),
    }
}

enum MalformedGridReason {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl From<MalformedGridReason> for MapError {
    fn from(reason: MalformedGridReason) -> Self {
        let reason = match reason {
            MalformedGridReason::Empty => "grid has no cells".to_string(),
            MalformedGridReason::Ragged {
                row,
                expected,
                found,
            } => format!("row {row} has {found} cells, expected {expected}"),
        };
        Self::MalformedGrid { reason }
    }
}
