//! Tests for neighbor patterns and cell classification

#[cfg(test)]
mod tests {
    use roadtile::MapError;
    use roadtile::map::classifier::{
        CellClass, NeighborPattern, classify, classify_pattern, classify_rows,
    };
    use roadtile::map::labels::{Axis, Heading, TileLabel};
    use roadtile::map::occupancy::OccupancyGrid;

    const RING: [[u8; 3]; 3] = [[255, 255, 255], [255, 0, 255], [255, 255, 255]];

    fn ring_rows() -> Vec<Vec<u8>> {
        RING.iter().map(|row| row.to_vec()).collect()
    }

    // Tests the table covers each pattern exactly once
    // Verified by mapping a dead end to a straight
    #[test]
    fn test_every_pattern_classified() {
        let mut labels = Vec::new();
        let mut unsupported = 0;
        for pattern in NeighborPattern::all() {
            match classify_pattern(pattern) {
                CellClass::Label(label) => labels.push(label),
                CellClass::Unsupported => {
                    assert_eq!(pattern.count(), 1);
                    unsupported += 1;
                }
            }
        }
        assert_eq!(unsupported, 4);
        assert_eq!(labels.len(), 12);
        for label in TileLabel::ALL {
            assert!(labels.contains(&label), "{label} never produced");
        }
    }

    // Tests curve headings for each pair of perpendicular neighbors
    // Verified by rotating the curve table one step
    #[test]
    fn test_curve_headings() {
        let curve = |e, s, w, n| classify_pattern(NeighborPattern::new(e, s, w, n));
        assert_eq!(
            curve(false, true, true, false),
            CellClass::Label(TileLabel::CurveLeft(Heading::North))
        );
        assert_eq!(
            curve(false, false, true, true),
            CellClass::Label(TileLabel::CurveLeft(Heading::East))
        );
        assert_eq!(
            curve(true, false, false, true),
            CellClass::Label(TileLabel::CurveLeft(Heading::South))
        );
        assert_eq!(
            curve(true, true, false, false),
            CellClass::Label(TileLabel::CurveLeft(Heading::West))
        );
    }

    // Tests three-way headings point away from the missing side
    // Verified by labeling with the missing side's heading
    #[test]
    fn test_three_way_headings() {
        let junction = |e, s, w, n| classify_pattern(NeighborPattern::new(e, s, w, n));
        assert_eq!(
            junction(true, true, true, false),
            CellClass::Label(TileLabel::ThreeWayLeft(Heading::West))
        );
        assert_eq!(
            junction(false, true, true, true),
            CellClass::Label(TileLabel::ThreeWayLeft(Heading::North))
        );
        assert_eq!(
            junction(true, false, true, true),
            CellClass::Label(TileLabel::ThreeWayLeft(Heading::East))
        );
        assert_eq!(
            junction(true, true, false, true),
            CellClass::Label(TileLabel::ThreeWayLeft(Heading::South))
        );
    }

    // Tests neighbors outside the grid count as empty
    // Verified by wrapping around the grid edge
    #[test]
    fn test_pattern_around_edges() {
        let grid = OccupancyGrid::from_rows(&ring_rows()).unwrap();
        assert_eq!(
            NeighborPattern::around(&grid, [0, 0]),
            NeighborPattern::new(true, true, false, false)
        );
        assert_eq!(NeighborPattern::around(&grid, [1, 1]).count(), 4);
        assert_eq!(
            NeighborPattern::around(&grid, [2, 1]),
            NeighborPattern::new(true, false, true, false)
        );
    }

    // Tests the ring labels: curves at corners, straights on edges
    // Verified by transposing the straight axes
    #[test]
    fn test_classify_ring() {
        let map = classify_rows(&ring_rows()).unwrap();
        assert_eq!((map.rows(), map.cols()), (3, 3));
        assert_eq!(map.label([0, 0]), Some(TileLabel::CurveLeft(Heading::West)));
        assert_eq!(map.label([0, 2]), Some(TileLabel::CurveLeft(Heading::North)));
        assert_eq!(map.label([2, 2]), Some(TileLabel::CurveLeft(Heading::East)));
        assert_eq!(map.label([2, 0]), Some(TileLabel::CurveLeft(Heading::South)));
        assert_eq!(map.label([0, 1]), Some(TileLabel::Straight(Axis::EastWest)));
        assert_eq!(map.label([1, 0]), Some(TileLabel::Straight(Axis::NorthSouth)));
        assert_eq!(map.label([1, 1]), Some(TileLabel::Floor));
        assert_eq!(map.label([3, 0]), None);
    }

    // Tests a lone road cell has no tile and becomes floor
    // Verified by reporting it as a dead end
    #[test]
    fn test_isolated_road_is_floor() {
        let map = classify_rows(&[vec![0, 0, 0], vec![0, 255, 0], vec![0, 0, 0]]).unwrap();
        assert!(map.cells().all(|(_, label)| label == TileLabel::Floor));
    }

    // Tests dead ends are reported with the first location and a count
    // Verified by stopping at the first dead end
    #[test]
    fn test_dead_ends_reported() {
        let grid = OccupancyGrid::from_rows(&[vec![0, 255, 255], vec![0, 0, 0]]).unwrap();
        match classify(&grid) {
            Err(MapError::UnsupportedPattern {
                location,
                dead_ends,
            }) => {
                assert_eq!(location, [0, 1]);
                assert_eq!(dead_ends, 2);
            }
            other => unreachable!("expected dead ends, got {other:?}"),
        }
    }

    // Tests cells iterate in row-major order and rows round trip
    // Verified by iterating column-major
    #[test]
    fn test_cells_row_major() {
        let map = classify_rows(&ring_rows()).unwrap();
        let order: Vec<[usize; 2]> = map.cells().map(|(location, _)| location).collect();
        assert_eq!(order.first(), Some(&[0, 0]));
        assert_eq!(order.get(1), Some(&[0, 1]));
        assert_eq!(order.get(3), Some(&[1, 0]));

        let rows = map.label_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.get(1).and_then(|row| row.get(1)), Some(&TileLabel::Floor));
    }
}
