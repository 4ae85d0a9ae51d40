//! Tests for edge signatures, base shape rotations and the road catalog

#[cfg(test)]
mod tests {
    use roadtile::MapError;
    use roadtile::spatial::direction::Direction;
    use roadtile::spatial::tiles::{BaseShape, EdgeSignature, Sides, Tile, TileCatalog};
    use std::collections::HashSet;

    // Tests the standard catalog holds each distinct rotation once
    // Verified by disabling rotation deduplication
    #[test]
    fn test_road_catalog_size() {
        let catalog = TileCatalog::road_tiles().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());

        let distinct: HashSet<Sides> = catalog.tiles().iter().map(|tile| *tile.sides()).collect();
        assert_eq!(distinct.len(), catalog.len());
    }

    // Tests unique rotation counts per base shape
    // Verified by always returning four rotations
    #[test]
    fn test_rotation_counts() {
        assert_eq!(BaseShape::FourWay.rotations().len(), 1);
        assert_eq!(BaseShape::ThreeWay.rotations().len(), 4);
        assert_eq!(BaseShape::Bend.rotations().len(), 4);
        assert_eq!(BaseShape::Empty.rotations().len(), 1);
        assert_eq!(BaseShape::Straight.rotations().len(), 2);
    }

    // Tests weights are one over the shape's rotation count
    // Verified by assigning every tile weight 1
    #[test]
    fn test_weights_per_shape() {
        let catalog = TileCatalog::road_tiles().unwrap();
        let weight = |name: &str| catalog.get(catalog.position(name).unwrap()).unwrap().weight();

        assert!((weight("4way_0") - 1.0).abs() < 1e-12);
        assert!((weight("3way_2") - 0.25).abs() < 1e-12);
        assert!((weight("stgh_1") - 0.5).abs() < 1e-12);

        let total: f64 = catalog.tiles().iter().map(Tile::weight).sum();
        assert!((total - 5.0).abs() < 1e-9);
    }

    // Tests a quarter turn moves each side clockwise
    // Verified by rotating counter-clockwise instead
    #[test]
    fn test_rotate_clockwise_sides() {
        let up_only = Sides::from_roads(true, false, false, false);
        let rotated = up_only.rotate_clockwise();
        assert!(rotated.is_road(Direction::Right));
        assert_eq!(rotated.road_count(), 1);
        assert_eq!(rotated.get(Direction::Up), EdgeSignature::Blank);
    }

    // Tests the unrotated shapes have the expected road sides
    // Verified by swapping the bend's sides
    #[test]
    fn test_base_shape_sides() {
        let bend = BaseShape::Bend.sides();
        assert!(bend.is_road(Direction::Down) && bend.is_road(Direction::Right));
        assert_eq!(bend.road_count(), 2);

        let three_way = BaseShape::ThreeWay.sides();
        assert!(!three_way.is_road(Direction::Up));
        assert_eq!(three_way.road_count(), 3);

        assert_eq!(BaseShape::Empty.sides().road_count(), 0);
        assert_eq!(BaseShape::FourWay.sides().road_count(), 4);
    }

    // Tests no catalog tile is a dead end
    // Verified by adding a single-road base shape
    #[test]
    fn test_no_single_road_tiles() {
        let catalog = TileCatalog::road_tiles().unwrap();
        for tile in catalog.tiles() {
            assert_ne!(tile.sides().road_count(), 1, "{tile}");
        }
    }

    // Tests invalid weights are rejected
    // Verified by removing the finite check
    #[test]
    fn test_tile_rejects_bad_weight() {
        let sides = BaseShape::Empty.sides();
        assert!(Tile::new("a", sides, 0.0).is_err());
        assert!(Tile::new("b", sides, -1.0).is_err());
        assert!(Tile::new("c", sides, f64::NAN).is_err());
        assert!(Tile::new("d", sides, 0.5).is_ok());
    }

    // Tests catalogs must contain at least one tile
    // Verified by accepting empty tile lists
    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            TileCatalog::from_tiles(Vec::new()),
            Err(MapError::InvalidParameter { .. })
        ));
        assert!(TileCatalog::from_shapes(&[]).is_err());
    }

    // Tests tile names follow shape and rotation index
    // Verified by numbering rotations from 1
    #[test]
    fn test_tile_names() {
        let catalog = TileCatalog::from_shapes(&[BaseShape::Straight]).unwrap();
        let names: Vec<&str> = catalog.tiles().iter().map(Tile::name).collect();
        assert_eq!(names, vec!["stgh_0", "stgh_1"]);
        assert_eq!(catalog.position("stgh_1"), Some(1));
        assert_eq!(catalog.position("missing"), None);
    }
}
