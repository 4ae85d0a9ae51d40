use crate::{
    algorithm::bitset::TileBitset,
    algorithm::cache::EdgeCache,
    io::error::{MapError, Result},
    spatial::direction::Direction,
    spatial::grid::PossibilityGrid,
};
use ndarray::Array2;

/// Cells whose options changed and must push constraints outward
///
/// Propagation runs in passes: every cell dirtied during a pass is processed
/// in the next one, in row-major order, until a pass dirties nothing.
#[derive(Debug, Clone)]
pub struct DirtyCells {
    flags: Array2<bool>,
    pending: usize,
}

impl DirtyCells {
    /// Create an empty set for a `height` x `width` grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            flags: Array2::from_elem((height, width), false),
            pending: 0,
        }
    }

    /// Mark a location, ignoring duplicates and out-of-bounds locations
    pub fn mark(&mut self, location: [usize; 2]) {
        if let Some(flag) = self.flags.get_mut(location) {
            if !*flag {
                *flag = true;
                self.pending += 1;
            }
        }
    }

    /// Check if no location is marked
    pub const fn is_empty(&self) -> bool {
        self.pending == 0
    }

    /// Number of marked locations
    pub const fn len(&self) -> usize {
        self.pending
    }

    /// Marked locations in row-major order
    pub fn locations(&self) -> Vec<[usize; 2]> {
        self.flags
            .indexed_iter()
            .filter(|(_, flag)| **flag)
            .map(|((row, col), _)| [row, col])
            .collect()
    }
}

/// Restrict the options at `location` to the `allowed` tiles
///
/// Returns whether the cell actually lost options.
///
/// # Errors
///
/// Returns a contradiction if the cell is left with no options
pub fn constrain_cell(
    grid: &mut PossibilityGrid,
    location: [usize; 2],
    allowed: &TileBitset,
) -> Result<bool> {
    let Some(cell) = grid.get_mut(location) else {
        return Ok(false);
    };

    let before = cell.count();
    cell.intersect_with(allowed);
    let after = cell.count();

    if after == 0 {
        return Err(MapError::Contradiction {
            location,
            iteration: 0,
        });
    }
    Ok(after < before)
}

/// Propagate constraints outward from the given cells to a fixed point
///
/// For each dirty cell and each in-bounds neighbor, the neighbor keeps only
/// tiles whose edge facing back matches an edge the dirty cell can still
/// present. Returns how many times a cell was narrowed.
///
/// # Errors
///
/// Returns a contradiction naming the first cell left without options
pub fn propagate(
    grid: &mut PossibilityGrid,
    edges: &EdgeCache,
    start: &[[usize; 2]],
) -> Result<usize> {
    let (height, width) = (grid.height(), grid.width());
    let mut dirty = DirtyCells::new(height, width);
    for &location in start {
        dirty.mark(location);
    }

    let mut narrowed = 0;
    while !dirty.is_empty() {
        let mut next = DirtyCells::new(height, width);

        for location in dirty.locations() {
            let Some(possible) = grid.get(location).cloned() else {
                continue;
            };

            for (direction, neighbor) in Direction::neighbors(location, height, width) {
                let allowed = edges.allowed_neighbors(&possible, direction);
                if constrain_cell(grid, neighbor, &allowed)? {
                    narrowed += 1;
                    next.mark(neighbor);
                }
            }
        }

        dirty = next;
    }

    Ok(narrowed)
}
