//! Closed vocabulary of road-tile labels
//!
//! Labels render to the exact strings used in map documents, e.g.
//! `curve_left/N` or `4way`, and parse back only from those strings.

use std::fmt;
use std::str::FromStr;

use crate::io::error::MapError;

/// Facing of an oriented tile, as written after the `/`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// `N`
    North,
    /// `E`
    East,
    /// `S`
    South,
    /// `W`
    West,
}

impl Heading {
    /// All headings in document order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Single-letter suffix
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }
}

/// Orientation of a straight road
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Road runs between the north and south sides, written `N`
    NorthSouth,
    /// Road runs between the east and west sides, written `W`
    EastWest,
}

/// Road-tile label of one map cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileLabel {
    /// No road
    Floor,
    /// Straight road along an axis
    Straight(Axis),
    /// Quarter turn
    CurveLeft(Heading),
    /// T junction
    ThreeWayLeft(Heading),
    /// Crossroads
    FourWay,
}

impl TileLabel {
    /// Every label, floor first
    pub const ALL: [Self; 12] = [
        Self::Floor,
        Self::Straight(Axis::NorthSouth),
        Self::Straight(Axis::EastWest),
        Self::CurveLeft(Heading::North),
        Self::CurveLeft(Heading::East),
        Self::CurveLeft(Heading::South),
        Self::CurveLeft(Heading::West),
        Self::ThreeWayLeft(Heading::North),
        Self::ThreeWayLeft(Heading::East),
        Self::ThreeWayLeft(Heading::South),
        Self::ThreeWayLeft(Heading::West),
        Self::FourWay,
    ];

    /// Whether the cell carries road
    pub fn is_road(self) -> bool {
        self != Self::Floor
    }

    /// Whether the cell is a junction that gets signs
    pub const fn is_intersection(self) -> bool {
        matches!(self, Self::ThreeWayLeft(_) | Self::FourWay)
    }
}

impl fmt::Display for TileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floor => f.write_str("floor"),
            Self::Straight(Axis::NorthSouth) => f.write_str("straight/N"),
            Self::Straight(Axis::EastWest) => f.write_str("straight/W"),
            Self::CurveLeft(heading) => write!(f, "curve_left/{}", heading.letter()),
            Self::ThreeWayLeft(heading) => write!(f, "3way_left/{}", heading.letter()),
            Self::FourWay => f.write_str("4way"),
        }
    }
}

impl FromStr for TileLabel {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let unknown = || MapError::InvalidParameter {
            parameter: "label",
            value: text.to_string(),
            reason: "not a road tile label".to_string(),
        };

        match text {
            "floor" => return Ok(Self::Floor),
            "4way" => return Ok(Self::FourWay),
            "straight/N" => return Ok(Self::Straight(Axis::NorthSouth)),
            "straight/W" => return Ok(Self::Straight(Axis::EastWest)),
            _ => {}
        }

        let (family, letter) = text.split_once('/').ok_or_else(unknown)?;
        let heading = Heading::from_letter(letter).ok_or_else(unknown)?;
        match family {
            "curve_left" => Ok(Self::CurveLeft(heading)),
            "3way_left" => Ok(Self::ThreeWayLeft(heading)),
            _ => Err(unknown()),
        }
    }
}
