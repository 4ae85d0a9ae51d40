//! Command-line interface for generating and annotating road maps

use crate::algorithm::executor::{SolverConfig, StepOutcome, WaveSolver};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{
    BITMAP_SUFFIX, DEFAULT_ATTEMPTS, DEFAULT_PREVIEW_SCALE, DEFAULT_SEED, DEFAULT_TILES,
    GENERATED_STEM, MAP_SUFFIX, MAX_GRID_DIMENSION, VISIBILITY_SUFFIX,
};
use crate::io::document::MapDocument;
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::io::image::{PreviewContext, export_occupancy_png, load_occupancy};
use crate::io::progress::ProgressManager;
use crate::io::report::VisibilityReport;
use crate::map::builder::{MapBuilder, MapOptions};
use crate::map::occupancy::OccupancyGrid;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roadtile")]
#[command(
    author,
    version,
    about = "Generate road maps, place signs and decorations, and compute tile visibility"
)]
/// Command-line arguments for the road map tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Occupancy PNG or directory of PNGs; a map is generated when omitted
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Generated map width in solver tiles
    #[arg(short, long, default_value_t = DEFAULT_TILES)]
    pub width: usize,

    /// Generated map height in solver tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILES)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generation attempts, each with a fresh seed, before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Scatter trees and duckies over the map
    #[arg(short, long)]
    pub decorate: bool,

    /// Write a JSON visibility report next to the map
    #[arg(short, long)]
    pub visibility: bool,

    /// Output stem for generated maps, or output directory for inputs
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process maps even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write the generated bitmap as PNG
    #[arg(short, long)]
    pub preview: bool,

    /// Pixels per bitmap cell in the preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SCALE)]
    pub scale: u32,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate numeric arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero or above the maximum grid dimension
    /// - Attempts is zero
    /// - Scale is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.attempts,
                &"must be at least 1",
            ));
        }
        PreviewContext::new(self.scale).map(|_| ())
    }
}

/// Where a map comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapSource {
    /// Generated by the solver
    Generated,
    /// Painted occupancy bitmap on disk
    Bitmap(PathBuf),
}

/// Orchestrates map generation and annotation with progress tracking
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process every map the CLI arguments name
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation or any map fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let sources = self.collect_sources()?;

        if sources.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sources.len());
        }

        for (index, source) in sources.iter().enumerate() {
            self.process_source(source, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_sources(&self) -> Result<Vec<MapSource>> {
        let Some(target) = &self.cli.target else {
            let source = MapSource::Generated;
            return Ok(if self.should_process(&source) {
                vec![source]
            } else {
                vec![]
            });
        };

        let mut paths = Vec::new();
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            paths.push(target.clone());
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| MapError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;
            for entry in entries {
                let path = entry?.path();
                let is_preview = path.to_string_lossy().ends_with(BITMAP_SUFFIX);
                if is_png(&path) && !is_preview {
                    paths.push(path);
                }
            }
            paths.sort();
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ));
        }

        Ok(paths
            .into_iter()
            .map(MapSource::Bitmap)
            .filter(|source| self.should_process(source))
            .collect())
    }

    fn should_process(&self, source: &MapSource) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = with_suffix(&self.output_stem(source), MAP_SUFFIX);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_source(&mut self, source: &MapSource, index: usize) -> Result<()> {
        let stem = self.output_stem(source);
        let name = stem
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let (occupancy, seed) = match source {
            MapSource::Generated => {
                let catalog = TileCatalog::road_tiles()?;
                let (grid, attempt_seed) = self.generate_with_retries(&catalog, index, &name)?;
                let occupancy = OccupancyGrid::from_tile_grid(&grid, &catalog)?;
                if self.cli.preview {
                    let context = PreviewContext::new(self.cli.scale)?;
                    export_occupancy_png(&occupancy, &context, &with_suffix(&stem, BITMAP_SUFFIX))?;
                }
                (occupancy, attempt_seed)
            }
            MapSource::Bitmap(path) => {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.start_map(index, &name, 1);
                }
                (load_occupancy(path)?, self.cli.seed)
            }
        };
        let mut selector = RandomSelector::new(seed);

        let builder = MapBuilder::new(MapOptions {
            decorate: self.cli.decorate,
            ..MapOptions::default()
        });
        let road_map = builder.build(&occupancy, &mut selector)?;
        let document = MapDocument::new(&road_map);

        if let Some(parent) = stem.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| MapError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
        document.write(&with_suffix(&stem, MAP_SUFFIX))?;

        if self.cli.visibility {
            VisibilityReport::new(&document, &road_map.visibility())
                .write(&with_suffix(&stem, VISIBILITY_SUFFIX))?;
        }

        tracing::info!(
            map = %name,
            rows = road_map.map().rows(),
            cols = road_map.map().cols(),
            objects = road_map.objects().len(),
            "map written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(index);
        }

        Ok(())
    }

    /// Run the solver, retrying with the next seed after a contradiction
    ///
    /// Returns the grid and the seed of the successful attempt.
    fn generate_with_retries(
        &mut self,
        catalog: &TileCatalog,
        index: usize,
        name: &str,
    ) -> Result<(TileGrid, u64)> {
        let config = SolverConfig::new(self.cli.width, self.cli.height);
        let mut last_error = None;

        for attempt in 0..self.cli.attempts {
            let seed = self.cli.seed.wrapping_add(attempt as u64);
            match self.generate_once(catalog, config, seed, index, name) {
                Ok(grid) => return Ok((grid, seed)),
                Err(error @ MapError::Contradiction { .. }) => {
                    tracing::warn!(attempt = attempt + 1, seed, %error, "generation attempt failed");
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            invalid_parameter("attempts", &self.cli.attempts, &"must be at least 1")
        }))
    }

    fn generate_once(
        &mut self,
        catalog: &TileCatalog,
        config: SolverConfig,
        seed: u64,
        index: usize,
        name: &str,
    ) -> Result<TileGrid> {
        let mut selector = RandomSelector::new(seed);
        let mut solver = WaveSolver::new(catalog, config)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(index, name, solver.cell_count());
        }

        while let StepOutcome::Collapsed { .. } = solver.step(&mut selector)? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_step(index, solver.iteration());
            }
        }
        solver.finish()
    }

    fn output_stem(&self, source: &MapSource) -> PathBuf {
        match source {
            MapSource::Generated => self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(GENERATED_STEM)),
            MapSource::Bitmap(path) => {
                let stem = path.file_stem().unwrap_or_default();
                match (&self.cli.output, path.parent()) {
                    (Some(directory), _) => directory.join(stem),
                    (None, Some(parent)) => parent.join(stem),
                    (None, None) => PathBuf::from(stem),
                }
            }
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

/// Append a suffix to a path's final component
pub fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
