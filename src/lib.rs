//! Procedural road maps from wave function collapse or painted bitmaps
//!
//! A solver fills a grid with road tiles under edge constraints. The result,
//! or any painted road bitmap, is classified into typed road-tile labels,
//! decorated with junction signs and scattered objects, and annotated with
//! the objects each cell can see.

#![forbid(unsafe_code)]

/// Wave function collapse: possibility sets, selection, propagation and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Classification, object placement and visibility over road bitmaps
pub mod map;
/// Region algebra for visibility tests
pub mod math;
/// Directions, the tile catalog and solver grids
pub mod spatial;

pub use io::error::{MapError, Result};
