//! Tests for the classification and placement pipeline

#[cfg(test)]
mod tests {
    use roadtile::MapError;
    use roadtile::algorithm::selection::RandomSelector;
    use roadtile::map::builder::{MapBuilder, MapOptions, RoadMap};
    use roadtile::map::classifier::classify_rows;
    use roadtile::map::occupancy::OccupancyGrid;
    use roadtile::map::scatter::ScatterConfig;

    fn figure_eight() -> OccupancyGrid {
        OccupancyGrid::from_rows(&[
            vec![255, 255, 255, 255, 255],
            vec![255, 0, 255, 0, 255],
            vec![255, 255, 255, 255, 255],
        ])
        .unwrap()
    }

    // Tests undecorated builds only place signs
    // Verified by decorating regardless of the option
    #[test]
    fn test_build_signs_only() {
        let builder = MapBuilder::default();
        assert!(!builder.options().decorate);

        let road_map = builder
            .build(&figure_eight(), &mut RandomSelector::new(1))
            .unwrap();
        assert_eq!(road_map.signs().len(), 6);
        assert!(road_map.decorations().is_empty());
        assert_eq!(road_map.objects().len(), 6);
        assert_eq!((road_map.map().rows(), road_map.map().cols()), (3, 5));
    }

    // Tests decorations follow the signs in the object list
    // Verified by prepending decorations
    #[test]
    fn test_build_decorated() {
        let builder = MapBuilder::new(MapOptions {
            decorate: true,
            scatter: ScatterConfig::default(),
        });
        let road_map = builder
            .build(&figure_eight(), &mut RandomSelector::new(8))
            .unwrap();

        assert!(!road_map.decorations().is_empty());
        let (signs, decorations) = road_map.objects().split_at(road_map.signs().len());
        assert!(signs.iter().all(|object| object.kind().is_sign()));
        assert!(decorations.iter().all(|object| !object.kind().is_sign()));
    }

    // Tests builds with the same seed match
    // Verified by reseeding inside the builder
    #[test]
    fn test_build_deterministic() {
        let builder = MapBuilder::new(MapOptions {
            decorate: true,
            scatter: ScatterConfig::default(),
        });
        let first = builder.build(&figure_eight(), &mut RandomSelector::new(21)).unwrap();
        let second = builder.build(&figure_eight(), &mut RandomSelector::new(21)).unwrap();
        assert_eq!(first, second);
    }

    // Tests dead ends abort the build
    // Verified by skipping dead-end cells
    #[test]
    fn test_build_dead_end() {
        let grid = OccupancyGrid::from_rows(&[vec![255, 255, 0]]).unwrap();
        let result = MapBuilder::default().build(&grid, &mut RandomSelector::new(1));
        assert!(matches!(result, Err(MapError::UnsupportedPattern { .. })));
    }

    // Tests assembling from parts and visibility indices
    // Verified by indexing visibility into signs only
    #[test]
    fn test_road_map_from_parts() {
        let map = classify_rows(&[vec![255, 255, 255], vec![255, 0, 255], vec![255, 255, 255]])
            .unwrap();
        let road_map = RoadMap::new(map, Vec::new(), Vec::new());
        assert!(road_map.objects().is_empty());

        let visibility = road_map.visibility();
        assert_eq!((visibility.rows(), visibility.cols()), (3, 3));
        assert!(visibility.iter().all(|(_, seen)| seen.is_empty()));
    }
}
