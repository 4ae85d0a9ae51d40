//! Point-membership regions on the plane
//!
//! Three primitives share one membership contract: rectangles, circular
//! sectors and composites of other regions. Every region carries an
//! `inverted` flag, so `contains(p)` is the primitive test XOR the flag and
//! negation is a flag flip. Points are `(row, col)` pairs in grid space;
//! sector angles are measured as `atan2(d_row, d_col)`.

use std::f64::consts::{PI, TAU};
use std::ops::Not;

/// A point in grid space, `(row, col)`
pub type Point = (f64, f64);

/// Geometry of a region, before inversion
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned box, bounds inclusive
    Rectangle {
        /// Smallest row
        row_min: f64,
        /// Largest row
        row_max: f64,
        /// Smallest column
        col_min: f64,
        /// Largest column
        col_max: f64,
    },
    /// Circular sector swept counter to the row axis from `theta_min` to
    /// `theta_max`
    Sector {
        /// Apex of the sector
        center: Point,
        /// Outer radius, never negative
        radius: f64,
        /// Start angle in `[0, 2π)`
        theta_min: f64,
        /// End angle in `[0, 2π)`
        theta_max: f64,
    },
    /// Positive members united, then masked by every inverted member
    Composite(Vec<Region>),
}

/// A shape with an inversion flag
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shape: Shape,
    inverted: bool,
}

impl Region {
    /// Rectangle spanning the given rows and columns
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn rectangle(rows: (f64, f64), cols: (f64, f64)) -> Self {
        let (row_min, row_max) = ordered(rows);
        let (col_min, col_max) = ordered(cols);
        Self::from_shape(Shape::Rectangle {
            row_min,
            row_max,
            col_min,
            col_max,
        })
    }

    /// Sector around `center` between two angles, in radians
    ///
    /// A negative radius is floored at zero and both angles are reduced into
    /// `[0, 2π)`.
    pub fn sector(center: Point, radius: f64, theta_min: f64, theta_max: f64) -> Self {
        Self::from_shape(Shape::Sector {
            center,
            radius: radius.max(0.0),
            theta_min: theta_min.rem_euclid(TAU),
            theta_max: theta_max.rem_euclid(TAU),
        })
    }

    /// Composite over the given members
    ///
    /// An empty composite contains nothing.
    pub const fn composite(members: Vec<Self>) -> Self {
        Self::from_shape(Shape::Composite(members))
    }

    /// The empty region
    pub const fn empty() -> Self {
        Self::composite(Vec::new())
    }

    const fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            inverted: false,
        }
    }

    /// Underlying geometry
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether membership is flipped
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Membership test
    pub fn contains(&self, point: Point) -> bool {
        self.inverted ^ self.shape.contains(point)
    }
}

impl Shape {
    fn contains(&self, (row, col): Point) -> bool {
        match self {
            Self::Rectangle {
                row_min,
                row_max,
                col_min,
                col_max,
            } => (*row_min..=*row_max).contains(&row) && (*col_min..=*col_max).contains(&col),
            Self::Sector {
                center,
                radius,
                theta_min,
                theta_max,
            } => {
                let d_row = row - center.0;
                let d_col = col - center.1;
                let distance = d_row.hypot(d_col);
                if distance <= 0.0 {
                    return true;
                }
                if distance > *radius {
                    return false;
                }
                let view = (theta_max - theta_min + TAU) % TAU;
                let facing = (theta_min + view / 2.0) % TAU;
                let heading = d_row.atan2(d_col);
                let offset = (facing - heading + 3.0 * PI) % TAU - PI;
                offset.abs() <= view / 2.0
            }
            Self::Composite(members) => {
                let (masks, positives): (Vec<&Region>, Vec<&Region>) =
                    members.iter().partition(|member| member.inverted);
                positives.iter().any(|member| member.contains((row, col)))
                    && masks.iter().all(|member| member.contains((row, col)))
            }
        }
    }
}

impl Not for Region {
    type Output = Self;

    fn not(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
