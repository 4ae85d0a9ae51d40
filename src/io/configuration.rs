//! Map constants and runtime configuration defaults

// Tile geometry, in cells
/// Half the side of a cell
pub const HALF_CELL: f64 = 0.5;
/// Half the width of a road
pub const ROAD_HALF_WIDTH: f64 = 0.425;
/// Distance from a T junction's center to the T sign's road edge
pub const T_CLEARANCE: f64 = 0.4;

/// Edge length of one tile in meters, written into map documents
pub const TILE_SIZE: f64 = 0.585;

/// Height of every junction sign in meters
pub const SIGN_HEIGHT: f64 = 0.2;

/// Minimum separation between scattered decorations, in cells
pub const DEFAULT_POISSON_RADIUS: f64 = 0.75;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Generation attempts before giving up on contradictions
pub const DEFAULT_ATTEMPTS: usize = 10;
/// Default generated map size in solver tiles, per side
pub const DEFAULT_TILES: usize = 4;
/// Default pixels per bitmap cell in preview images
pub const DEFAULT_PREVIEW_SCALE: u32 = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: usize = 30;

// Output settings
/// Output stem for maps generated without an input file
pub const GENERATED_STEM: &str = "roadmap";
/// Suffix of map documents
pub const MAP_SUFFIX: &str = "_map.yaml";
/// Suffix of visibility reports
pub const VISIBILITY_SUFFIX: &str = "_visibility.json";
/// Suffix of generated bitmap previews
pub const BITMAP_SUFFIX: &str = "_bitmap.png";
