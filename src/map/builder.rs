//! One-call pipeline from occupancy bitmap to a populated road map

use rand::Rng;

use crate::algorithm::selection::RandomSelector;
use crate::io::error::Result;
use crate::map::classifier::{ClassifiedMap, classify};
use crate::map::coordinates::MapFrame;
use crate::map::objects::PlacedObject;
use crate::map::occupancy::OccupancyGrid;
use crate::map::scatter::{ScatterConfig, scatter_decorations};
use crate::map::signs::place_signs;
use crate::map::visibility::{VisibilityMap, visible};

/// What the builder adds on top of classification
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapOptions {
    /// Scatter decorations after placing signs
    pub decorate: bool,
    /// Decoration sampling parameters
    pub scatter: ScatterConfig,
}

/// Classifies a bitmap and places signs and decorations on it
#[derive(Clone, Debug, Default)]
pub struct MapBuilder {
    options: MapOptions,
}

impl MapBuilder {
    /// Builder with the given options
    pub const fn new(options: MapOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub const fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Run classification and placement
    ///
    /// The selector is only drawn from when decorating.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPattern` if the bitmap contains a dead end
    pub fn build<R: Rng>(
        &self,
        occupancy: &OccupancyGrid,
        selector: &mut RandomSelector<R>,
    ) -> Result<RoadMap> {
        let map = classify(occupancy)?;
        let mut objects = place_signs(&map);
        let sign_count = objects.len();

        if self.options.decorate {
            let frame = MapFrame::new(map.rows(), map.cols());
            objects.extend(scatter_decorations(frame, &self.options.scatter, selector));
        }

        tracing::debug!(
            rows = map.rows(),
            cols = map.cols(),
            signs = sign_count,
            decorations = objects.len() - sign_count,
            "map built"
        );

        Ok(RoadMap {
            map,
            objects,
            sign_count,
        })
    }
}

/// A classified map with its placed objects, signs first
#[derive(Clone, Debug, PartialEq)]
pub struct RoadMap {
    map: ClassifiedMap,
    objects: Vec<PlacedObject>,
    sign_count: usize,
}

impl RoadMap {
    /// Assemble from parts; the first `sign_count` objects are signs
    pub fn new(map: ClassifiedMap, signs: Vec<PlacedObject>, decorations: Vec<PlacedObject>) -> Self {
        let sign_count = signs.len();
        let mut objects = signs;
        objects.extend(decorations);
        Self {
            map,
            objects,
            sign_count,
        }
    }

    /// Label grid
    pub const fn map(&self) -> &ClassifiedMap {
        &self.map
    }

    /// Junction signs
    pub fn signs(&self) -> &[PlacedObject] {
        self.objects.get(..self.sign_count).unwrap_or(&[])
    }

    /// Scattered decorations
    pub fn decorations(&self) -> &[PlacedObject] {
        self.objects.get(self.sign_count..).unwrap_or(&[])
    }

    /// Signs followed by decorations
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Objects visible from each cell, as indices into [`RoadMap::objects`]
    pub fn visibility(&self) -> VisibilityMap {
        visible(&self.map, &self.objects)
    }
}
