//! Command-line interface for unshredding single images or whole directories

use crate::algorithm::pipeline::{Stage, UnshredConfig, Unshredder};
use crate::algorithm::shuffle::shuffle_shreds;
use crate::io::configuration::{DEFAULT_SHRED_WIDTH, OUTPUT_SUFFIX, SHREDDED_SUFFIX};
use crate::io::error::{Result, UnshredError, file_system_error};
use crate::io::image::{is_supported_image, load_image, save_image, suffixed_path};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble vertically shredded images by matching strip borders"
)]
/// Command-line arguments for the unshredding tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Width of each shred in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_SHRED_WIDTH)]
    pub shred_width: usize,

    /// Fail instead of writing a partial image when the neighbor chain breaks
    #[arg(short, long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Shuffle the input into shreds with this seed instead of reconstructing it
    #[arg(long, value_name = "SEED")]
    pub shuffle: Option<u64>,
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

    /// Reconstruction settings derived from the arguments
    pub const fn unshred_config(&self) -> UnshredConfig {
        UnshredConfig {
            shred_width: self.shred_width,
            strict: self.strict,
        }
    }

    /// Suffix of the file written for each input
    pub const fn output_suffix(&self) -> &'static str {
        if self.shuffle.is_some() {
            SHREDDED_SUFFIX
        } else {
            OUTPUT_SUFFIX
        }
    }

    /// Path of the file written for `input_path`
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        suffixed_path(input_path, self.output_suffix())
    }
}

/// Orchestrates processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or processing of any file fails;
    /// files after the failing one are not processed
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let outcome = files
            .iter()
            .enumerate()
            .try_for_each(|(index, file)| self.process_file(file, index));

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        outcome
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if !target.is_dir() {
            return Err(UnshredError::InvalidTarget {
                path: target.clone(),
                reason: "must be an image file or a directory",
            });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(file_system_error(target, "read directory"))? {
            let path = entry
                .map_err(file_system_error(target, "read directory entry"))?
                .path();
            if path.is_file()
                && is_supported_image(&path)
                && !Self::is_generated(&path)
                && self.should_process_file(&path)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    // Outputs of earlier runs are never inputs when scanning a directory
    fn is_generated(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(SHREDDED_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.cli.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = self.cli.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let grid = load_image(input_path)?;

        let (image, status) = if let Some(seed) = self.cli.shuffle {
            let mut rng = StdRng::seed_from_u64(seed);
            let (shuffled, placement) = shuffle_shreds(&grid, self.cli.shred_width, &mut rng)?;
            info!("{} shuffled as {placement:?}", input_path.display());
            (shuffled, "shuffled")
        } else {
            let unshredder = Unshredder::new(self.cli.unshred_config());
            let progress = &mut self.progress_manager;
            let reconstruction = unshredder.run_with_progress(&grid, |stage| {
                if let Some(pm) = progress.as_mut() {
                    pm.enter_stage(index, stage);
                }
            })?;
            let status = if reconstruction.is_complete() {
                "done"
            } else {
                "partial"
            };
            (reconstruction.image, status)
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, Stage::Write);
        }
        save_image(&image, &output_path)?;
        info!("wrote {}", output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, status);
        }

        Ok(())
    }
}
