//! Geometric utilities for the visibility engine

/// Rectangles, circular sectors and their unions and complements
pub mod region;

pub use region::{Point, Region, Shape};
