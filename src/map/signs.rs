//! Traffic signs at junction tiles
//!
//! Offsets are relative to the cell center in map coordinates. The T sign
//! sits on the closed side of a junction, half a cell out; the arm signs
//! sit beside it, inset by the gap between the T clearance and the cell edge.

use crate::io::configuration::{HALF_CELL, SIGN_HEIGHT, T_CLEARANCE};
use crate::map::classifier::ClassifiedMap;
use crate::map::coordinates::MapFrame;
use crate::map::labels::{Heading, TileLabel};
use crate::map::objects::{ObjectKind, PlacedObject, SignKind};

/// One row of the sign table: kind, rotation in degrees and center offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignSlot {
    /// Sign variant
    pub kind: SignKind,
    /// Rotation in degrees, `0..360`
    pub rotation: i32,
    /// Offset `(dx, dy)` from the cell center
    pub offset: (f64, f64),
}

const fn slot(kind: SignKind, rotation: i32, dx: f64, dy: f64) -> SignSlot {
    SignSlot {
        kind,
        rotation,
        offset: (dx, dy),
    }
}

/// Signs belonging to a tile label; empty for non-junctions
pub fn sign_slots(label: TileLabel) -> Vec<SignSlot> {
    use SignKind::{FourWayIntersect, LeftTIntersect, RightTIntersect, TIntersect};

    let edge = HALF_CELL;
    let inset = HALF_CELL - T_CLEARANCE;

    match label {
        TileLabel::ThreeWayLeft(Heading::West) => vec![
            slot(TIntersect, 90, 0.0, -edge),
            slot(LeftTIntersect, 0, inset, -edge),
            slot(RightTIntersect, 180, -inset, -edge),
        ],
        TileLabel::ThreeWayLeft(Heading::South) => vec![
            slot(TIntersect, 0, -edge, 0.0),
            slot(LeftTIntersect, 270, -edge, -inset),
            slot(RightTIntersect, 90, -edge, inset),
        ],
        TileLabel::ThreeWayLeft(Heading::East) => vec![
            slot(TIntersect, 270, 0.0, edge),
            slot(LeftTIntersect, 180, -inset, edge),
            slot(RightTIntersect, 0, inset, edge),
        ],
        TileLabel::ThreeWayLeft(Heading::North) => vec![
            slot(TIntersect, 180, edge, 0.0),
            slot(LeftTIntersect, 90, edge, inset),
            slot(RightTIntersect, 270, edge, -inset),
        ],
        TileLabel::FourWay => vec![
            slot(FourWayIntersect, 0, -edge, edge),
            slot(FourWayIntersect, 270, edge, edge),
            slot(FourWayIntersect, 90, -edge, -edge),
            slot(FourWayIntersect, 180, edge, -edge),
        ],
        TileLabel::Floor | TileLabel::Straight(_) | TileLabel::CurveLeft(_) => Vec::new(),
    }
}

/// Place signs for every junction of a map, in row-major cell order
pub fn place_signs(map: &ClassifiedMap) -> Vec<PlacedObject> {
    let frame = MapFrame::new(map.rows(), map.cols());
    map.cells()
        .filter(|(_, label)| label.is_intersection())
        .flat_map(|(location, label)| {
            let (cx, cy) = frame.cell_center(location);
            sign_slots(label).into_iter().map(move |slot| {
                let (dx, dy) = slot.offset;
                PlacedObject::new(
                    ObjectKind::Sign(slot.kind),
                    slot.rotation,
                    (round2(cx + dx), round2(cy + dy)),
                    SIGN_HEIGHT,
                )
            })
        })
        .collect()
}

/// Round to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
