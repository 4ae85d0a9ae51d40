//! Road tile catalog with per-side edge signatures
//!
//! The standard catalog is derived from five base shapes by quarter-turn
//! rotation. Rotations that reproduce an existing edge signature are dropped,
//! and every surviving variant of a shape shares the shape's unit weight so
//! that each base shape is equally likely before constraints apply.

use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use std::fmt;

/// Connection label a tile exposes on one side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSignature {
    /// The road continues through this side
    Road,
    /// Nothing crosses this side
    Blank,
}

impl EdgeSignature {
    /// Both signatures, in the order used by the edge index
    pub const ALL: [Self; 2] = [Self::Road, Self::Blank];

    /// Index of this signature inside [`EdgeSignature::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Road => 0,
            Self::Blank => 1,
        }
    }

    const fn from_road(is_road: bool) -> Self {
        if is_road { Self::Road } else { Self::Blank }
    }
}

/// Edge signatures of all four sides, indexed by [`Direction::index`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sides([EdgeSignature; 4]);

impl Sides {
    /// Build from road flags for the up, down, left and right sides
    pub const fn from_roads(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self([
            EdgeSignature::from_road(up),
            EdgeSignature::from_road(down),
            EdgeSignature::from_road(left),
            EdgeSignature::from_road(right),
        ])
    }

    /// Signature on the given side
    pub const fn get(&self, direction: Direction) -> EdgeSignature {
        self.0[direction.index()]
    }

    /// Whether a road leaves through the given side
    pub fn is_road(&self, direction: Direction) -> bool {
        self.get(direction) == EdgeSignature::Road
    }

    /// Number of sides carrying a road
    pub fn road_count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.is_road(direction))
            .count()
    }

    /// The same sides after a quarter turn clockwise
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = self.0;
        for direction in Direction::ALL {
            if let Some(slot) = rotated.get_mut(direction.rotate_clockwise().index()) {
                *slot = self.get(direction);
            }
        }
        Self(rotated)
    }
}

/// Shapes the standard catalog is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseShape {
    /// Crossroads, road on every side
    FourWay,
    /// T junction, blank on one side
    ThreeWay,
    /// Quarter turn joining two adjacent sides
    Bend,
    /// No road at all
    Empty,
    /// Straight road joining two opposite sides
    Straight,
}

impl BaseShape {
    /// Base shapes in catalog order
    pub const ALL: [Self; 5] = [
        Self::FourWay,
        Self::ThreeWay,
        Self::Bend,
        Self::Empty,
        Self::Straight,
    ];

    /// Short name used as the prefix of tile names
    pub const fn name(self) -> &'static str {
        match self {
            Self::FourWay => "4way",
            Self::ThreeWay => "3way",
            Self::Bend => "bend",
            Self::Empty => "none",
            Self::Straight => "stgh",
        }
    }

    /// Edge signatures of the unrotated shape
    pub const fn sides(self) -> Sides {
        match self {
            Self::FourWay => Sides::from_roads(true, true, true, true),
            Self::ThreeWay => Sides::from_roads(false, true, true, true),
            Self::Bend => Sides::from_roads(false, true, false, true),
            Self::Empty => Sides::from_roads(false, false, false, false),
            Self::Straight => Sides::from_roads(false, false, true, true),
        }
    }

    /// Distinct rotations of this shape, starting with the unrotated one
    pub fn rotations(self) -> Vec<Sides> {
        let mut unique: Vec<Sides> = Vec::with_capacity(4);
        let mut current = self.sides();
        for _ in 0..4 {
            if !unique.contains(&current) {
                unique.push(current);
            }
            current = current.rotate_clockwise();
        }
        unique
    }
}

/// A catalog entry: one rotation of one base shape
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    name: String,
    sides: Sides,
    weight: f64,
}

impl Tile {
    /// Create a tile
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a finite positive number
    pub fn new(name: impl Into<String>, sides: Sides, weight: f64) -> Result<Self> {
        let name = name.into();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(invalid_parameter(
                "weight",
                &weight,
                &format!("tile '{name}' needs a finite positive weight"),
            ));
        }
        Ok(Self {
            name,
            sides,
            weight,
        })
    }

    /// Tile name, `<shape>_<rotation>`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edge signatures of all sides
    pub const fn sides(&self) -> &Sides {
        &self.sides
    }

    /// Signature presented on one side
    pub const fn edge(&self, direction: Direction) -> EdgeSignature {
        self.sides.get(direction)
    }

    /// Relative sampling weight
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (w={:.3})", self.name, self.weight)
    }
}

/// Immutable, indexable set of tiles used by the solver
#[derive(Clone, Debug, PartialEq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// The standard road catalog built from every [`BaseShape`]
    ///
    /// # Errors
    ///
    /// Never fails for the built-in shapes; the result type is shared with
    /// [`TileCatalog::from_shapes`]
    pub fn road_tiles() -> Result<Self> {
        Self::from_shapes(&BaseShape::ALL)
    }

    /// Catalog of every distinct rotation of the given shapes
    ///
    /// # Errors
    ///
    /// Returns an error if no shapes are given
    pub fn from_shapes(shapes: &[BaseShape]) -> Result<Self> {
        let mut tiles = Vec::new();
        for &shape in shapes {
            let rotations = shape.rotations();
            let weight = 1.0 / rotations.len() as f64;
            for (index, sides) in rotations.into_iter().enumerate() {
                tiles.push(Tile::new(
                    format!("{}_{index}", shape.name()),
                    sides,
                    weight,
                )?);
            }
        }
        Self::from_tiles(tiles)
    }

    /// Catalog from explicit tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list is empty
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MapError::InvalidParameter {
                parameter: "tiles",
                value: "[]".to_string(),
                reason: "a catalog needs at least one tile".to_string(),
            });
        }
        Ok(Self { tiles })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a catalog index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in index order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the tile with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.name == name)
    }
}
