//! Objects placed on a road map: traffic signs and decorations

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MapError, Result};

/// Traffic sign variants placed at junctions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignKind {
    /// Facing the stem of a T junction
    TIntersect,
    /// Left arm of a T junction
    LeftTIntersect,
    /// Right arm of a T junction
    RightTIntersect,
    /// Any approach to a crossroads
    FourWayIntersect,
}

impl SignKind {
    /// Every sign kind
    pub const ALL: [Self; 4] = [
        Self::TIntersect,
        Self::LeftTIntersect,
        Self::RightTIntersect,
        Self::FourWayIntersect,
    ];

    /// Name used in map documents
    pub const fn name(self) -> &'static str {
        match self {
            Self::TIntersect => "sign_T_intersect",
            Self::LeftTIntersect => "sign_left_T_intersect",
            Self::RightTIntersect => "sign_right_T_intersect",
            Self::FourWayIntersect => "sign_4_way_intersect",
        }
    }
}

/// Inclusive height range of a decoration kind, in meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightBounds {
    /// Shortest allowed height
    pub min: f64,
    /// Tallest allowed height
    pub max: f64,
}

impl HeightBounds {
    /// Whether a height lies inside the range
    pub fn contains(self, height: f64) -> bool {
        (self.min..=self.max).contains(&height)
    }

    /// Height at fraction `t` of the way from `min` to `max`
    pub fn lerp(self, t: f64) -> f64 {
        (self.max - self.min).mul_add(t, self.min)
    }
}

/// Decorations scattered over a map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Tree
    Tree,
    /// Rubber duck
    Duckie,
}

impl DecorationKind {
    /// Every decoration kind
    pub const ALL: [Self; 2] = [Self::Tree, Self::Duckie];

    /// Name used in map documents
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Duckie => "duckie",
        }
    }

    /// Allowed height range
    pub const fn height_bounds(self) -> HeightBounds {
        match self {
            Self::Tree => HeightBounds { min: 0.3, max: 0.5 },
            Self::Duckie => HeightBounds {
                min: 0.08,
                max: 0.11,
            },
        }
    }
}

/// What an object is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Junction sign
    Sign(SignKind),
    /// Scattered decoration
    Decoration(DecorationKind),
}

impl ObjectKind {
    /// Name used in map documents
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sign(kind) => kind.name(),
            Self::Decoration(kind) => kind.name(),
        }
    }

    /// Whether this is a sign
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Sign(_))
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectKind {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Self> {
        SignKind::ALL
            .into_iter()
            .map(Self::Sign)
            .chain(DecorationKind::ALL.into_iter().map(Self::Decoration))
            .find(|kind| kind.name() == text)
            .ok_or_else(|| MapError::InvalidParameter {
                parameter: "kind",
                value: text.to_string(),
                reason: "not a sign or decoration kind".to_string(),
            })
    }
}

/// An object at a fixed position on the map
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    kind: ObjectKind,
    rotation: u16,
    position: (f64, f64),
    height: f64,
}

impl PlacedObject {
    /// Place an object; the rotation is reduced into `0..360`
    pub fn new(kind: ObjectKind, rotation: i32, position: (f64, f64), height: f64) -> Self {
        Self {
            kind,
            rotation: rotation.rem_euclid(360) as u16,
            position,
            height,
        }
    }

    /// Object kind
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Rotation in whole degrees, `0..360`
    pub const fn rotation(&self) -> u16 {
        self.rotation
    }

    /// Position `(x, y)` in map coordinates
    pub const fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Height in meters
    pub const fn height(&self) -> f64 {
        self.height
    }
}
