//! Per-cell object visibility
//!
//! A cell sees its own footprint and the footprints of its road
//! neighbors. Objects are tested in grid space after converting their map
//! position through the map's [`MapFrame`]. Cells are independent, so they
//! are evaluated in parallel; results keep row-major order.

use rayon::prelude::*;

use crate::map::classifier::ClassifiedMap;
use crate::map::coordinates::MapFrame;
use crate::map::footprint::footprint;
use crate::map::labels::TileLabel;
use crate::map::objects::PlacedObject;
use crate::math::region::Region;
use crate::spatial::direction::Direction;

/// Indices of the visible objects for every cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMap {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<usize>>,
}

impl VisibilityMap {
    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Object indices visible from a location, ascending
    pub fn at(&self, [row, col]: [usize; 2]) -> Option<&[usize]> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).map(Vec::as_slice)
    }

    /// Locations with their visible object indices, row-major
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 2], &[usize])> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, visible)| ([index / cols, index % cols], visible.as_slice()))
    }
}

/// Region seen from a cell: its own footprint joined with its road neighbors'
///
/// Floor cells see nothing.
pub fn visible_region(map: &ClassifiedMap, location: [usize; 2]) -> Region {
    let Some(label) = map.label(location).filter(|label| label.is_road()) else {
        return Region::empty();
    };

    let mut members = vec![footprint(label, location)];
    for (_, neighbor) in Direction::neighbors(location, map.rows(), map.cols()) {
        if let Some(neighbor_label) = map.label(neighbor).filter(|label| label.is_road()) {
            members.push(footprint(neighbor_label, neighbor));
        }
    }
    Region::composite(members)
}

/// For each cell, the indices into `objects` of the objects it can see
pub fn visible(map: &ClassifiedMap, objects: &[PlacedObject]) -> VisibilityMap {
    let (rows, cols) = (map.rows(), map.cols());
    let frame = MapFrame::new(rows, cols);
    let grid_positions: Vec<(f64, f64)> = objects
        .iter()
        .map(|object| frame.to_grid(object.position()))
        .collect();

    let cells: Vec<Vec<usize>> = (0..rows * cols)
        .into_par_iter()
        .map(|index| {
            let location = [index / cols, index % cols];
            if map.label(location).is_none_or(|label| label == TileLabel::Floor) {
                return Vec::new();
            }
            let region = visible_region(map, location);
            grid_positions
                .iter()
                .enumerate()
                .filter(|(_, position)| region.contains(**position))
                .map(|(object, _)| object)
                .collect()
        })
        .collect();

    VisibilityMap { rows, cols, cells }
}
