//! Possibility grid owned by one solver run, and the collapsed result
//!
//! The possibility grid stores one [`TileBitset`] per cell. It is created
//! with every tile possible everywhere and only ever shrinks: collapse
//! reduces a cell to a singleton and propagation removes incompatible tiles
//! from neighbors.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{MapError, Result};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::TileCatalog;

/// Per-cell remaining tile options for one generation attempt
#[derive(Debug, Clone)]
pub struct PossibilityGrid {
    /// Remaining options (indexed by `row`, `col`)
    pub cells: Array2<TileBitset>,

    /// Number of tiles in the catalog the sets range over
    pub tile_count: usize,
}

impl PossibilityGrid {
    /// Create a grid where every tile is possible in every cell
    pub fn new(height: usize, width: usize, tile_count: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), TileBitset::all(tile_count)),
            tile_count,
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Options remaining at a location
    pub fn get(&self, location: [usize; 2]) -> Option<&TileBitset> {
        self.cells.get(location)
    }

    /// Mutable options at a location
    pub fn get_mut(&mut self, location: [usize; 2]) -> Option<&mut TileBitset> {
        self.cells.get_mut(location)
    }

    /// Remaining option count per cell
    pub fn entropy(&self) -> Array2<usize> {
        self.cells.map(TileBitset::count)
    }

    /// Whether every cell holds exactly one tile
    pub fn is_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.count() == 1)
    }

    /// First cell (row-major) with no options left
    pub fn find_contradiction(&self) -> Option<[usize; 2]> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_empty())
            .map(|((row, col), _)| [row, col])
    }

    /// Extract the collapsed tile grid
    ///
    /// # Errors
    ///
    /// Returns a contradiction for the first empty cell, or an invalid
    /// parameter error if some cell still holds several options
    pub fn to_tile_grid(&self) -> Result<TileGrid> {
        if let Some(location) = self.find_contradiction() {
            return Err(MapError::Contradiction {
                location,
                iteration: 0,
            });
        }

        let mut tiles = Array2::zeros(self.cells.dim());
        for ((row, col), cell) in self.cells.indexed_iter() {
            let tile = cell.collapsed().ok_or_else(|| MapError::InvalidParameter {
                parameter: "grid",
                value: format!("[{row}, {col}]"),
                reason: format!("cell still has {} options", cell.count()),
            })?;
            if let Some(slot) = tiles.get_mut([row, col]) {
                *slot = tile;
            }
        }
        Ok(TileGrid { tiles })
    }
}

/// Fully collapsed grid of catalog indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    /// Catalog index per cell (indexed by `row`, `col`)
    pub tiles: Array2<usize>,
}

impl TileGrid {
    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Catalog index at a location
    pub fn tile_at(&self, location: [usize; 2]) -> Option<usize> {
        self.tiles.get(location).copied()
    }

    /// Neighbor pairs whose shared edge signatures disagree
    ///
    /// Each unordered pair is reported once, from its upper or left cell.
    pub fn mismatched_edges(&self, catalog: &TileCatalog) -> Vec<([usize; 2], Direction)> {
        let (height, width) = self.tiles.dim();
        let mut mismatches = Vec::new();

        for ((row, col), &index) in self.tiles.indexed_iter() {
            let Some(tile) = catalog.get(index) else {
                mismatches.push(([row, col], Direction::Up));
                continue;
            };
            for direction in [Direction::Down, Direction::Right] {
                let Some(neighbor) = direction.step([row, col], height, width) else {
                    continue;
                };
                let matches = self
                    .tile_at(neighbor)
                    .and_then(|other| catalog.get(other))
                    .is_some_and(|other| other.edge(direction.reverse()) == tile.edge(direction));
                if !matches {
                    mismatches.push(([row, col], direction));
                }
            }
        }
        mismatches
    }

    /// Whether every pair of neighbors agrees on its shared edge
    pub fn is_consistent(&self, catalog: &TileCatalog) -> bool {
        self.mismatched_edges(catalog).is_empty()
    }
}
