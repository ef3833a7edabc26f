//! Per-file stage progress with automatic batching for large sets

use crate::algorithm::pipeline::Stage;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display while files move through the pipeline
///
/// Shows one stage bar per file for small batches and adds a single batch bar
/// once the file count exceeds what fits on screen
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `stage_reached`, `stage_label`) for rolling window display
    file_states: Vec<(String, usize, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

/// How many bars a batch of files is shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Per-file stage bars, reused in a rolling window
    pub file_bars: usize,
    /// Whether a batch bar counts finished files
    pub batched: bool,
}

/// Bar layout for `file_count` files
///
/// Per-file bars are capped and show the most recent files. A batch bar is
/// added once the files outnumber the cap by more than one.
pub const fn bar_layout(file_count: usize) -> BarLayout {
    BarLayout {
        file_bars: if file_count < MAX_INDIVIDUAL_PROGRESS_BARS {
            file_count
        } else {
            MAX_INDIVIDUAL_PROGRESS_BARS
        },
        batched: file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1,
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let layout = bar_layout(file_count);

        if layout.batched {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..layout.file_bars {
            let pb = ProgressBar::new(Stage::ALL.len() as u64);
            pb.set_style(STAGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a file before its first stage runs
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, String::from("load"));
        }
        self.update_bars();
    }

    /// Report that `stage` has begun for a file
    pub fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage.step() - 1;
            state.2 = stage.to_string();
        }
        self.update_bars();
    }

    /// Mark a file as finished with a short status such as `done` or `skipped`
    pub fn complete_file(&mut self, index: usize, status: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = Stage::ALL.len();
            state.2 = status.to_string();
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recently started files, one per bar
    fn update_bars(&self) {
        let active: Vec<_> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar, (name, reached, label)) in self.file_bars.iter().zip(visible) {
            bar.set_position(*reached as u64);
            bar.set_message(label.clone());
            bar.set_prefix(name.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
