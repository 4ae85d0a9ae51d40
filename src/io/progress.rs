//! Progress display for batches of maps, with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress of one map: display name, completed steps, total steps
#[derive(Clone, Debug, Default)]
struct MapState {
    name: String,
    step: usize,
    total: usize,
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per map for small batches; larger batches add a single
/// batch bar and keep a rolling window of the most recent maps.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    states: Vec<MapState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Create bars for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..map_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STEP_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking a map expected to take `total` steps
    pub fn start_map(&mut self, index: usize, name: &str, total: usize) {
        if index >= self.states.len() {
            self.states.resize(index + 1, MapState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = MapState {
                name: name.to_string(),
                step: 0,
                total,
            };
        }
        self.update_bars();
    }

    /// Report completed steps of a map
    pub fn update_step(&mut self, index: usize, step: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.step = step.min(state.total);
        }
        self.update_bars();
    }

    /// Mark a map as completed and advance the batch bar
    pub fn complete_map(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.step = state.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps processed");
        }
        if let Err(error) = self.multi_progress.clear() {
            tracing::debug!(%error, "could not clear progress bars");
        }
    }

    /// Show the most recent maps in the available bars
    fn update_bars(&self) {
        let active: Vec<&MapState> = self
            .states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.map_bars.iter().zip(visible) {
            bar.set_length(state.total as u64);
            bar.set_position(state.step as u64);
            let width = state.total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.step, state.total));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.map_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
