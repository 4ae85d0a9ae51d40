//! Spatial data structures shared by the solver and the map pipeline
//!
//! This module contains:
//! - Compass directions and bounds-checked neighbor stepping
//! - The road tile catalog and its edge signatures
//! - Possibility and collapsed tile grids

/// Compass directions and in-bounds neighbor enumeration
pub mod direction;
/// Possibility grid and collapsed tile grid
pub mod grid;
/// Road tiles, base shapes and the catalog built from them
pub mod tiles;

pub use direction::Direction;
pub use grid::{PossibilityGrid, TileGrid};
pub use tiles::{EdgeSignature, Tile, TileCatalog};
