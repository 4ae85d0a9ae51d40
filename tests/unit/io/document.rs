//! Tests for rendering and parsing map documents

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use roadtile::MapError;
    use roadtile::algorithm::selection::RandomSelector;
    use roadtile::io::document::MapDocument;
    use roadtile::map::builder::{MapBuilder, MapOptions};
    use roadtile::map::classifier::ClassifiedMap;
    use roadtile::map::labels::{Heading, TileLabel};
    use roadtile::map::objects::{DecorationKind, ObjectKind, PlacedObject};
    use roadtile::map::occupancy::OccupancyGrid;
    use roadtile::map::scatter::ScatterConfig;
    use roadtile::map::signs::place_signs;
    use tempfile::TempDir;

    fn crossroads() -> ClassifiedMap {
        ClassifiedMap::from_labels(Array2::from_elem((1, 1), TileLabel::FourWay)).unwrap()
    }

    fn decorated_document(seed: u64) -> MapDocument {
        let occupancy = OccupancyGrid::from_rows(&[
            vec![255, 255, 255, 255, 255],
            vec![255, 0, 255, 0, 255],
            vec![255, 255, 255, 255, 255],
        ])
        .unwrap();
        let builder = MapBuilder::new(MapOptions {
            decorate: true,
            scatter: ScatterConfig::default(),
        });
        let road_map = builder
            .build(&occupancy, &mut RandomSelector::new(seed))
            .unwrap();
        MapDocument::new(&road_map)
    }

    // Tests the exact text of a small document
    // Verified by indenting object fields one space less
    #[test]
    fn test_render_crossroads() {
        let map = crossroads();
        let signs = place_signs(&map);
        let document = MapDocument::from_parts(map, signs.get(..1).unwrap(), &[]);

        let expected = "tiles:\n  - [4way]\nobjects:\n sign1:\n  kind: sign_4_way_intersect\n  pos: [0.00, 0.00]\n  rotate: 0\n  height: 0.20\ntile_size: 0.585\n";
        assert_eq!(document.render(), expected);
        assert_eq!(document.to_string(), expected);
    }

    // Tests object naming: signs first, decorations counted together
    // Verified by restarting the counter per kind
    #[test]
    fn test_object_names() {
        let tree = PlacedObject::new(ObjectKind::Decoration(DecorationKind::Tree), 0, (0.0, 0.0), 0.4);
        let duckie =
            PlacedObject::new(ObjectKind::Decoration(DecorationKind::Duckie), 0, (0.5, 0.0), 0.1);
        let map = crossroads();
        let signs = place_signs(&map);
        let document = MapDocument::from_parts(map, &signs, &[tree.clone(), duckie, tree]);

        let names: Vec<&str> = document
            .objects()
            .iter()
            .map(|named| named.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["sign1", "sign2", "sign3", "sign4", "tree1", "duckie2", "tree3"]
        );
    }

    // Tests parsing what was rendered gives back the same document
    // Verified by reading positions as (y, x)
    #[test]
    fn test_parse_rendered() {
        for seed in [1, 2, 3] {
            let document = decorated_document(seed);
            assert!(document.objects().len() > 6);
            let parsed = MapDocument::parse(&document.render()).unwrap();
            assert_eq!(parsed, document);
        }
    }

    // Tests write and read through the filesystem
    // Verified by writing to a different path than read
    #[test]
    fn test_write_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("figure_map.yaml");
        let document = decorated_document(4);
        document.write(&path).unwrap();
        assert_eq!(MapDocument::read(&path).unwrap(), document);

        assert!(matches!(
            MapDocument::read(&dir.path().join("missing.yaml")),
            Err(MapError::FileSystem { .. })
        ));
    }

    // Tests parsed labels land in their grid cells
    // Verified by transposing parsed rows
    #[test]
    fn test_parse_labels() {
        let text = "tiles:\n  - [curve_left/W, straight/W, curve_left/N]\n  - [straight/N, floor, straight/N]\nobjects:\ntile_size: 0.585\n";
        let document = MapDocument::parse(text).unwrap();
        let map = document.map();
        assert_eq!((map.rows(), map.cols()), (2, 3));
        assert_eq!(map.label([0, 2]), Some(TileLabel::CurveLeft(Heading::North)));
        assert_eq!(map.label([1, 1]), Some(TileLabel::Floor));
        assert!(document.objects().is_empty());
        assert!((document.tile_size() - 0.585).abs() < 1e-12);
    }

    fn error_line(text: &str) -> usize {
        match MapDocument::parse(text) {
            Err(MapError::Document { line, .. }) => line,
            other => unreachable!("expected a document error, got {other:?}"),
        }
    }

    // Tests malformed documents report the offending line
    // Verified by reporting every error on line 1
    #[test]
    fn test_parse_errors() {
        assert_eq!(error_line("tiles:\n  - [4way, bogus]\n"), 2);
        assert_eq!(error_line("tiles:\n  - [4way, 4way]\n  - [4way]\n"), 3);
        assert_eq!(error_line("tiles:\n  - [4way]\nextras:\n"), 3);
        assert_eq!(error_line("  - [4way]\n"), 1);
        assert_eq!(error_line("objects:\n"), 1);
        assert_eq!(
            error_line("tiles:\n  - [4way]\nobjects:\n sign1:\n  kind: sign_T_intersect\n  pos: [0.0, 0.0]\n  rotate: 90\n"),
            4
        );
        assert_eq!(
            error_line("tiles:\n  - [4way]\nobjects:\n sign1:\n  kind: lamp\n"),
            5
        );
        assert_eq!(
            error_line("tiles:\n  - [4way]\nobjects:\n sign1:\n  pos: [1.0]\n"),
            5
        );
        assert_eq!(error_line("tiles:\n  - [4way]\nobjects:\n  kind: tree\n"), 4);
    }
}
