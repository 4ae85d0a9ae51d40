//! Drivable area of each tile label as a region in grid space
//!
//! Footprints are built around the cell center `(cx, cy) = (row + 0.5,
//! col + 0.5)`. Roads are `2 * ROAD_HALF_WIDTH` wide; open sides reach the
//! cell edge and closed sides stop at the road edge.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::io::configuration::{HALF_CELL, ROAD_HALF_WIDTH};
use crate::map::labels::{Axis, Heading, TileLabel};
use crate::math::region::Region;

/// Region a tile with `label` covers when placed at `location`
pub fn footprint(label: TileLabel, [row, col]: [usize; 2]) -> Region {
    let cx = row as f64 + HALF_CELL;
    let cy = col as f64 + HALF_CELL;
    let w = ROAD_HALF_WIDTH;
    let h = HALF_CELL;

    match label {
        TileLabel::Floor => Region::empty(),
        TileLabel::Straight(Axis::EastWest) => Region::rectangle((cx - w, cx + w), (cy - h, cy + h)),
        TileLabel::Straight(Axis::NorthSouth) => {
            Region::rectangle((cx - h, cx + h), (cy - w, cy + w))
        }
        TileLabel::CurveLeft(heading) => {
            let (corner, start) = match heading {
                Heading::North => ((cx + h, cy - h), 3.0 * FRAC_PI_2),
                Heading::East => ((cx - h, cy - h), 0.0),
                Heading::South => ((cx - h, cy + h), FRAC_PI_2),
                Heading::West => ((cx + h, cy + h), PI),
            };
            let end = start + FRAC_PI_2;
            Region::composite(vec![
                Region::sector(corner, h + w, start, end),
                !Region::sector(corner, h - w, start, end),
            ])
        }
        TileLabel::ThreeWayLeft(heading) => {
            let (cross, through) = match heading {
                Heading::West => (
                    Region::rectangle((cx - w, cx + h), (cy - w, cy + w)),
                    Region::rectangle((cx - w, cx + w), (cy - h, cy + h)),
                ),
                Heading::South => (
                    Region::rectangle((cx - h, cx + h), (cy - w, cy + w)),
                    Region::rectangle((cx - w, cx + w), (cy - w, cy + h)),
                ),
                Heading::East => (
                    Region::rectangle((cx - h, cx + w), (cy - w, cy + w)),
                    Region::rectangle((cx - w, cx + w), (cy - h, cy + h)),
                ),
                Heading::North => (
                    Region::rectangle((cx - h, cx + h), (cy - w, cy + w)),
                    Region::rectangle((cx - w, cx + w), (cy - h, cy + w)),
                ),
            };
            Region::composite(vec![cross, through])
        }
        TileLabel::FourWay => Region::composite(vec![
            Region::rectangle((cx - h, cx + h), (cy - w, cy + w)),
            Region::rectangle((cx - w, cx + w), (cy - h, cy + h)),
        ]),
    }
}

