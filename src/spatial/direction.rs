//! Compass directions and in-bounds neighbor enumeration
//!
//! All edge-of-grid handling goes through [`Direction::neighbors`]: a
//! neighbor that would fall outside the grid is simply not produced.

use std::fmt;

/// One of the four sides of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// Every direction, in the order used to index edge signatures
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Index of this direction inside [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// The opposite side (involutive)
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The side this one lands on after a quarter turn clockwise
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Step from `location` in this direction, if the target is inside a
    /// `height` x `width` grid
    pub const fn step(self, location: [usize; 2], height: usize, width: usize) -> Option<[usize; 2]> {
        let [row, col] = location;
        match self {
            Self::Up if row > 0 => Some([row - 1, col]),
            Self::Down if row + 1 < height => Some([row + 1, col]),
            Self::Left if col > 0 => Some([row, col - 1]),
            Self::Right if col + 1 < width => Some([row, col + 1]),
            _ => None,
        }
    }

    /// In-bounds neighbors of `location` tagged with the direction leading to them
    pub fn neighbors(
        location: [usize; 2],
        height: usize,
        width: usize,
    ) -> impl Iterator<Item = (Self, [usize; 2])> {
        Self::ALL.into_iter().filter_map(move |direction| {
            direction
                .step(location, height, width)
                .map(|neighbor| (direction, neighbor))
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
