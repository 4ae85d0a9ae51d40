//! Poisson-disc scattering of decorations
//!
//! Samples are drawn in grid space over the whole map rectangle, converted
//! to map space through [`MapFrame`], then given a kind, rotation and height
//! from the injected selector. The sampler seed comes from the same
//! selector, so one seed reproduces the whole scatter.

use fast_poisson::Poisson2D;
use rand::Rng;

use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::DEFAULT_POISSON_RADIUS;
use crate::io::error::{Result, invalid_parameter};
use crate::map::coordinates::MapFrame;
use crate::map::objects::{DecorationKind, ObjectKind, PlacedObject};
use crate::map::signs::round2;

/// Sampling radius and the decoration kinds to draw from
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterConfig {
    radius: f64,
    kinds: Vec<DecorationKind>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_POISSON_RADIUS,
            kinds: DecorationKind::ALL.to_vec(),
        }
    }
}

impl ScatterConfig {
    /// Validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The radius is not a finite positive number
    /// - No decoration kinds are given
    pub fn new(radius: f64, kinds: Vec<DecorationKind>) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid_parameter(
                "radius",
                &radius,
                &"must be a finite positive distance",
            ));
        }
        if kinds.is_empty() {
            return Err(invalid_parameter(
                "kinds",
                &"[]",
                &"at least one decoration kind is needed",
            ));
        }
        Ok(Self { radius, kinds })
    }

    /// Minimum separation between samples, in cells
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Kinds decorations are drawn from
    pub fn kinds(&self) -> &[DecorationKind] {
        &self.kinds
    }
}

/// Scatter decorations over a map with the given frame
///
/// Positions and heights are rounded to two decimals.
pub fn scatter_decorations<R: Rng>(
    frame: MapFrame,
    config: &ScatterConfig,
    selector: &mut RandomSelector<R>,
) -> Vec<PlacedObject> {
    let samples = Poisson2D::new()
        .with_seed(selector.seed())
        .with_dimensions([frame.rows() as f64, frame.cols() as f64], config.radius);

    let decorations: Vec<PlacedObject> = samples
        .into_iter()
        .filter_map(|[row, col]| {
            let kind = *config.kinds.get(selector.uniform_index(config.kinds.len()))?;
            let rotation = selector.uniform_index(360) as i32;
            let height = round2(kind.height_bounds().lerp(selector.unit()));
            let (x, y) = frame.to_map((row, col));
            Some(PlacedObject::new(
                ObjectKind::Decoration(kind),
                rotation,
                (round2(x), round2(y)),
                height,
            ))
        })
        .collect();

    tracing::debug!(
        count = decorations.len(),
        radius = config.radius,
        "scattered decorations"
    );
    decorations
}
