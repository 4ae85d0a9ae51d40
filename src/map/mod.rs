//! Road map pipeline: classification, object placement and visibility

/// Classification, sign placement and scattering in one call
pub mod builder;
/// Neighbor-pattern table and the classified label grid
pub mod classifier;
/// Grid space to map space conversion
pub mod coordinates;
/// Drivable region of each tile label
pub mod footprint;
/// Road-tile label vocabulary
pub mod labels;
/// Signs, decorations and their placement records
pub mod objects;
/// Validated occupancy bitmaps and solver output rendering
pub mod occupancy;
/// Poisson-disc decoration scatter
pub mod scatter;
/// Junction sign table
pub mod signs;
/// Per-cell visible objects
pub mod visibility;

pub use builder::{MapBuilder, MapOptions, RoadMap};
pub use classifier::{ClassifiedMap, classify};
pub use labels::TileLabel;
pub use occupancy::OccupancyGrid;
