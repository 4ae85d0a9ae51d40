//! Tests for per-cell object visibility

#[cfg(test)]
mod tests {
    use roadtile::map::classifier::{ClassifiedMap, classify_rows};
    use roadtile::map::coordinates::MapFrame;
    use roadtile::map::objects::{DecorationKind, ObjectKind, PlacedObject};
    use roadtile::map::visibility::{visible, visible_region};

    fn ring() -> ClassifiedMap {
        classify_rows(&[
            vec![255, 255, 255],
            vec![255, 0, 255],
            vec![255, 255, 255],
        ])
        .unwrap()
    }

    fn marker_at(frame: MapFrame, location: [usize; 2]) -> PlacedObject {
        PlacedObject::new(
            ObjectKind::Decoration(DecorationKind::Duckie),
            0,
            frame.cell_center(location),
            0.1,
        )
    }

    // Tests a corner sees itself and its two road neighbors only
    // Verified by dropping neighbor footprints
    #[test]
    fn test_ring_corner() {
        let map = ring();
        let frame = MapFrame::new(3, 3);
        let objects: Vec<PlacedObject> = [[0, 0], [0, 1], [1, 0], [2, 2], [0, 2]]
            .into_iter()
            .map(|location| marker_at(frame, location))
            .collect();

        let visibility = visible(&map, &objects);
        assert_eq!(visibility.at([0, 0]), Some(&[0, 1, 2][..]));
        assert_eq!(visibility.at([2, 2]), Some(&[3][..]));
    }

    // Tests a straight edge sees both neighboring corners
    // Verified by checking only the cell's own footprint
    #[test]
    fn test_ring_edge() {
        let map = ring();
        let frame = MapFrame::new(3, 3);
        let objects = vec![
            marker_at(frame, [0, 0]),
            marker_at(frame, [0, 2]),
            marker_at(frame, [2, 1]),
        ];
        let visibility = visible(&map, &objects);
        assert_eq!(visibility.at([0, 1]), Some(&[0, 1][..]));
        assert_eq!(visibility.at([2, 1]), Some(&[2][..]));
    }

    // Tests floor cells see nothing even with objects on them
    // Verified by giving floor cells the whole cell as footprint
    #[test]
    fn test_floor_sees_nothing() {
        let map = ring();
        let frame = MapFrame::new(3, 3);
        let objects = vec![marker_at(frame, [1, 1])];
        let visibility = visible(&map, &objects);
        assert_eq!(visibility.at([1, 1]), Some(&[][..]));
        assert!(!visible_region(&map, [1, 1]).contains((1.5, 1.5)));
    }

    // Tests the result shape and row-major iteration
    // Verified by swapping rows and columns
    #[test]
    fn test_map_shape() {
        let map = classify_rows(&[vec![255, 255, 255, 255], vec![255, 255, 255, 255]]).unwrap();
        let visibility = visible(&map, &[]);
        assert_eq!((visibility.rows(), visibility.cols()), (2, 4));
        assert_eq!(visibility.at([2, 0]), None);

        let locations: Vec<[usize; 2]> = visibility.iter().map(|(location, _)| location).collect();
        assert_eq!(locations.len(), 8);
        assert_eq!(locations.get(4), Some(&[1, 0]));
        assert!(visibility.iter().all(|(_, seen)| seen.is_empty()));
    }

    // Tests the visible region joins own and neighbor footprints
    // Verified by including floor neighbors
    #[test]
    fn test_visible_region() {
        let map = ring();
        let region = visible_region(&map, [0, 0]);
        assert!(region.contains((0.5, 0.5)));
        assert!(region.contains((0.5, 1.5)));
        assert!(region.contains((1.5, 0.5)));
        assert!(!region.contains((1.5, 1.5)));
        assert!(!region.contains((0.5, 2.5)));
    }
}
