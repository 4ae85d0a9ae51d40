//! Occupancy bitmap to road-tile labels
//!
//! Each road cell is labeled from its 4-neighbor pattern alone, through an
//! explicit table over all sixteen patterns. Patterns with a single neighbor
//! are dead ends, for which no tile exists; they are reported instead of
//! being guessed.

use ndarray::Array2;

use crate::io::error::{MapError, Result};
use crate::map::labels::{Axis, Heading, TileLabel};
use crate::map::occupancy::OccupancyGrid;
use crate::spatial::direction::Direction;

/// Which 4-neighbors of a cell carry road
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct NeighborPattern {
    /// Next column
    pub east: bool,
    /// Next row
    pub south: bool,
    /// Previous column
    pub west: bool,
    /// Previous row
    pub north: bool,
}

impl NeighborPattern {
    /// Pattern from flags in (east, south, west, north) order
    pub const fn new(east: bool, south: bool, west: bool, north: bool) -> Self {
        Self {
            east,
            south,
            west,
            north,
        }
    }

    /// Pattern around `location`; neighbors outside the grid count as empty
    pub fn around(occupancy: &OccupancyGrid, location: [usize; 2]) -> Self {
        let (rows, cols) = (occupancy.rows(), occupancy.cols());
        let occupied = |direction: Direction| {
            direction
                .step(location, rows, cols)
                .is_some_and(|neighbor| occupancy.is_road(neighbor))
        };
        Self::new(
            occupied(Direction::Right),
            occupied(Direction::Down),
            occupied(Direction::Left),
            occupied(Direction::Up),
        )
    }

    /// Number of occupied neighbors
    pub fn count(self) -> usize {
        [self.east, self.south, self.west, self.north]
            .into_iter()
            .filter(|&occupied| occupied)
            .count()
    }

    /// All sixteen patterns
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..16).map(|bits| {
            Self::new(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            )
        })
    }
}

/// Outcome of labeling one road cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellClass {
    /// The pattern has a tile
    Label(TileLabel),
    /// Dead end: exactly one neighbor
    Unsupported,
}

/// Label for a road cell with the given neighbors
pub const fn classify_pattern(pattern: NeighborPattern) -> CellClass {
    let NeighborPattern {
        east,
        south,
        west,
        north,
    } = pattern;

    let label = match (east, south, west, north) {
        (false, false, false, false) => TileLabel::Floor,

        (true, false, true, false) => TileLabel::Straight(Axis::EastWest),
        (false, true, false, true) => TileLabel::Straight(Axis::NorthSouth),

        (false, true, true, false) => TileLabel::CurveLeft(Heading::North),
        (false, false, true, true) => TileLabel::CurveLeft(Heading::East),
        (true, false, false, true) => TileLabel::CurveLeft(Heading::South),
        (true, true, false, false) => TileLabel::CurveLeft(Heading::West),

        (false, true, true, true) => TileLabel::ThreeWayLeft(Heading::North),
        (true, false, true, true) => TileLabel::ThreeWayLeft(Heading::East),
        (true, true, false, true) => TileLabel::ThreeWayLeft(Heading::South),
        (true, true, true, false) => TileLabel::ThreeWayLeft(Heading::West),

        (true, true, true, true) => TileLabel::FourWay,

        (true, false, false, false)
        | (false, true, false, false)
        | (false, false, true, false)
        | (false, false, false, true) => return CellClass::Unsupported,
    };
    CellClass::Label(label)
}

/// Rectangular grid of tile labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMap {
    labels: Array2<TileLabel>,
}

impl ClassifiedMap {
    /// Wrap an existing label grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no rows or no columns
    pub fn from_labels(labels: Array2<TileLabel>) -> Result<Self> {
        if labels.is_empty() {
            return Err(MapError::MalformedGrid {
                reason: "label grid has no cells".to_string(),
            });
        }
        Ok(Self { labels })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.labels.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.labels.ncols()
    }

    /// Label at a location
    pub fn label(&self, location: [usize; 2]) -> Option<TileLabel> {
        self.labels.get(location).copied()
    }

    /// Underlying label grid
    pub const fn labels(&self) -> &Array2<TileLabel> {
        &self.labels
    }

    /// Locations and labels in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 2], TileLabel)> + '_ {
        self.labels
            .indexed_iter()
            .map(|((row, col), &label)| ([row, col], label))
    }

    /// Labels of each row, in order
    pub fn label_rows(&self) -> Vec<Vec<TileLabel>> {
        self.labels.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

/// Label every cell of an occupancy grid
///
/// Empty cells are floor. A road cell with no road neighbor is also floor.
///
/// # Errors
///
/// Returns `UnsupportedPattern` naming the first dead end in row-major order
/// and the total number of dead ends
pub fn classify(occupancy: &OccupancyGrid) -> Result<ClassifiedMap> {
    let mut labels = Array2::from_elem((occupancy.rows(), occupancy.cols()), TileLabel::Floor);
    let mut dead_ends: Vec<[usize; 2]> = Vec::new();

    for ((row, col), label) in labels.indexed_iter_mut() {
        if !occupancy.is_road([row, col]) {
            continue;
        }
        match classify_pattern(NeighborPattern::around(occupancy, [row, col])) {
            CellClass::Label(found) => *label = found,
            CellClass::Unsupported => dead_ends.push([row, col]),
        }
    }

    if let Some(&location) = dead_ends.first() {
        tracing::debug!(count = dead_ends.len(), ?location, "dead ends in occupancy");
        return Err(MapError::UnsupportedPattern {
            location,
            dead_ends: dead_ends.len(),
        });
    }

    ClassifiedMap::from_labels(labels)
}

/// Validate raw 0/255 rows and label them
///
/// # Errors
///
/// Returns an error if the rows are malformed or contain a dead end
pub fn classify_rows(rows: &[Vec<u8>]) -> Result<ClassifiedMap> {
    classify(&OccupancyGrid::from_rows(rows)?)
}
