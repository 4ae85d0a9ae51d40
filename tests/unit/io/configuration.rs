//! Tests for geometry constants and runtime defaults

#[cfg(test)]
mod tests {
    use roadtile::io::configuration::{
        BITMAP_SUFFIX, DEFAULT_ATTEMPTS, DEFAULT_POISSON_RADIUS, DEFAULT_SEED, DEFAULT_TILES,
        HALF_CELL, MAP_SUFFIX, MAX_GRID_DIMENSION, MAX_INDIVIDUAL_PROGRESS_BARS,
        ROAD_HALF_WIDTH, SIGN_HEIGHT, T_CLEARANCE, TILE_SIZE, VISIBILITY_SUFFIX,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // Tests road geometry values
    // Verified by changing the road half width
    #[test]
    fn test_road_geometry() {
        assert!(close(HALF_CELL, 0.5));
        assert!(close(ROAD_HALF_WIDTH, 0.425));
        assert!(close(T_CLEARANCE, 0.4));
    }

    // Tests the T clearance stays on the road and the road inside the cell
    // Verified by inverting relationship values
    #[test]
    fn test_geometry_relationship() {
        let (clearance, road, cell) = (T_CLEARANCE, ROAD_HALF_WIDTH, HALF_CELL);
        assert!(clearance < road);
        assert!(road < cell);
    }

    // Tests document constants
    // Verified by changing tile size and sign height
    #[test]
    fn test_document_values() {
        assert!(close(TILE_SIZE, 0.585));
        assert!(close(SIGN_HEIGHT, 0.2));
        assert!(close(DEFAULT_POISSON_RADIUS, 0.75));
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests generation defaults
    // Verified by reducing dimension limit
    #[test]
    fn test_generation_defaults() {
        assert_eq!(DEFAULT_ATTEMPTS, 10);
        assert_eq!(DEFAULT_TILES, 4);
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests output suffixes
    // Verified by giving the preview the map suffix
    #[test]
    fn test_output_suffixes() {
        assert_eq!(MAP_SUFFIX, "_map.yaml");
        assert_eq!(VISIBILITY_SUFFIX, "_visibility.json");
        assert_eq!(BITMAP_SUFFIX, "_bitmap.png");
    }
}
