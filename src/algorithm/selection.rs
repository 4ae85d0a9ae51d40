use crate::{
    algorithm::bitset::TileBitset,
    spatial::grid::PossibilityGrid,
    spatial::tiles::TileCatalog,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Injectable random source for every stochastic choice in the crate
///
/// Entropy tie-breaks, weighted tile draws, Poisson seeds and decoration
/// attributes all draw from the same selector, so a fixed seed reproduces a
/// whole run.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing random source
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Direct access to the underlying source
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Uniform index in `0..len`, or 0 for an empty range
    pub fn uniform_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Fresh 64-bit seed for collaborators that own their own generator
    pub fn seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }

    /// Generic weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}

/// Pick the most constrained undecided cell
///
/// Cells with one option are resolved and cells with none are left for the
/// contradiction check, so only counts of two or more compete. Ties are
/// broken uniformly at random. Returns `None` once nothing is undecided.
pub fn min_entropy_location<R: Rng>(
    grid: &PossibilityGrid,
    selector: &mut RandomSelector<R>,
) -> Option<[usize; 2]> {
    let mut minimum = usize::MAX;
    let mut candidates: Vec<[usize; 2]> = Vec::new();

    for ((row, col), cell) in grid.cells.indexed_iter() {
        let count = cell.count();
        if count <= 1 {
            continue;
        }
        if count < minimum {
            minimum = count;
            candidates.clear();
        }
        if count == minimum {
            candidates.push([row, col]);
        }
    }

    let index = selector.uniform_index(candidates.len());
    candidates.get(index).copied()
}

/// Draw a tile for `location` and reduce the cell to it
///
/// Weights are renormalized over the tiles still possible at the cell.
/// Returns the chosen catalog index, or `None` when the cell has no options.
pub fn collapse<R: Rng>(
    grid: &mut PossibilityGrid,
    location: [usize; 2],
    catalog: &TileCatalog,
    selector: &mut RandomSelector<R>,
) -> Option<usize> {
    let tile_count = grid.tile_count;
    let cell = grid.get_mut(location)?;
    let options = cell.to_vec();
    let weights: Vec<f64> = options
        .iter()
        .map(|&index| catalog.get(index).map_or(0.0, |tile| tile.weight()))
        .collect();

    let chosen = *options.get(selector.weighted_choice(&weights))?;
    *cell = TileBitset::singleton(tile_count, chosen);
    Some(chosen)
}
