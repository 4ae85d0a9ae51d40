use crate::{
    algorithm::bitset::TileBitset,
    algorithm::cache::EdgeCache,
    algorithm::propagation::{constrain_cell, propagate},
    algorithm::selection::{RandomSelector, collapse, min_entropy_location},
    io::error::{ErrorContext, MapError, Result, WithContext, invalid_parameter},
    spatial::direction::Direction,
    spatial::grid::{PossibilityGrid, TileGrid},
    spatial::tiles::{EdgeSignature, TileCatalog},
};
use rand::Rng;

/// How the grid border constrains tiles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Border tiles may point roads out of the grid
    Open,
    /// Border tiles may only present blank edges outward
    #[default]
    Closed,
}

/// Grid size and border behavior for one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of tile columns
    pub width: usize,
    /// Number of tile rows
    pub height: usize,
    /// Border behavior
    pub boundary: Boundary,
}

impl SolverConfig {
    /// Closed-border configuration of the given size
    ///
    /// Closed output renders to bitmaps the classifier accepts.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            boundary: Boundary::Closed,
        }
    }

    /// Same size with a different border behavior
    #[must_use]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Result of a single solver iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was collapsed and its constraints propagated
    Collapsed {
        /// Grid location of the collapsed cell
        location: [usize; 2],
        /// Catalog index chosen for it
        tile: usize,
    },
    /// No undecided cell remains
    Complete,
}

/// Wave function collapse over a fixed-size grid
///
/// Repeatedly collapses the lowest-entropy cell and propagates to a fixed
/// point. A contradiction ends the attempt; no backtracking is performed.
pub struct WaveSolver<'c> {
    catalog: &'c TileCatalog,
    edges: EdgeCache,
    grid: PossibilityGrid,
    iteration: usize,
}

impl<'c> WaveSolver<'c> {
    /// Create a solver with every tile possible everywhere
    ///
    /// A closed boundary is applied and propagated immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero
    /// - The closed boundary leaves some cell without options
    pub fn new(catalog: &'c TileCatalog, config: SolverConfig) -> Result<Self> {
        if config.width == 0 {
            return Err(invalid_parameter("width", &config.width, &"must be at least 1"));
        }
        if config.height == 0 {
            return Err(invalid_parameter(
                "height",
                &config.height,
                &"must be at least 1",
            ));
        }

        let mut solver = Self {
            catalog,
            edges: EdgeCache::new(catalog),
            grid: PossibilityGrid::new(config.height, config.width, catalog.len()),
            iteration: 0,
        };

        if config.boundary == Boundary::Closed {
            solver.close_boundary()?;
        }

        Ok(solver)
    }

    /// Remove every tile that points a road out of the grid
    fn close_boundary(&mut self) -> Result<()> {
        let (height, width) = (self.grid.height(), self.grid.width());
        let mut border = Vec::new();

        for row in 0..height {
            for col in 0..width {
                let location = [row, col];
                let mut allowed = TileBitset::all(self.catalog.len());
                let mut on_border = false;
                for direction in Direction::ALL {
                    if direction.step(location, height, width).is_none() {
                        on_border = true;
                        if let Some(blank) = self.edges.tiles_with(direction, EdgeSignature::Blank)
                        {
                            allowed.intersect_with(blank);
                        }
                    }
                }
                if on_border {
                    constrain_cell(&mut self.grid, location, &allowed)?;
                    border.push(location);
                }
            }
        }

        let narrowed = propagate(&mut self.grid, &self.edges, &border)?;
        tracing::debug!(
            border_cells = border.len(),
            narrowed,
            "closed boundary applied"
        );
        Ok(())
    }

    /// Access the current possibility grid
    pub const fn grid(&self) -> &PossibilityGrid {
        &self.grid
    }

    /// The catalog the solver draws from
    pub const fn catalog(&self) -> &'c TileCatalog {
        self.catalog
    }

    /// Number of completed iterations
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Number of cells, an upper bound on the iterations left
    pub fn cell_count(&self) -> usize {
        self.grid.height() * self.grid.width()
    }

    /// Run a single iteration of the algorithm
    ///
    /// # Errors
    ///
    /// Returns a contradiction if propagation empties a cell
    pub fn step<R: Rng>(&mut self, selector: &mut RandomSelector<R>) -> Result<StepOutcome> {
        let Some(location) = min_entropy_location(&self.grid, selector) else {
            return Ok(StepOutcome::Complete);
        };

        self.iteration += 1;
        let context = ErrorContext {
            iteration: Some(self.iteration),
            grid_position: Some(location),
            ..Default::default()
        };

        let tile = collapse(&mut self.grid, location, self.catalog, selector).ok_or(
            MapError::Contradiction {
                location,
                iteration: self.iteration,
            },
        )?;
        tracing::trace!(iteration = self.iteration, ?location, tile, "collapsed cell");

        propagate(&mut self.grid, &self.edges, &[location]).with_context(context)?;

        Ok(StepOutcome::Collapsed { location, tile })
    }

    /// Iterate until every cell is decided
    ///
    /// # Errors
    ///
    /// Returns a contradiction if any iteration empties a cell
    pub fn run<R: Rng>(&mut self, selector: &mut RandomSelector<R>) -> Result<TileGrid> {
        while let StepOutcome::Collapsed { .. } = self.step(selector)? {}
        self.finish()
    }

    /// Extract the collapsed grid after the last iteration
    ///
    /// # Errors
    ///
    /// Returns a contradiction if some cell has no options left
    pub fn finish(&self) -> Result<TileGrid> {
        let grid = self.grid.to_tile_grid().with_context(ErrorContext {
            iteration: Some(self.iteration),
            operation: Some("finish"),
            ..Default::default()
        })?;
        tracing::debug!(
            iterations = self.iteration,
            height = grid.height(),
            width = grid.width(),
            "generation complete"
        );
        Ok(grid)
    }
}

/// Generate a fully collapsed grid in one call
///
/// # Errors
///
/// Returns an error for invalid dimensions or when the attempt contradicts.
/// Retrying with a fresh seed is left to the caller.
pub fn generate<R: Rng>(
    catalog: &TileCatalog,
    config: SolverConfig,
    selector: &mut RandomSelector<R>,
) -> Result<TileGrid> {
    WaveSolver::new(catalog, config)?.run(selector)
}
