//! End-to-end reconstruction of one shredded image

use crate::algorithm::chain::{Chain, build_chain};
use crate::algorithm::neighbors::{NeighborMap, resolve_neighbors};
use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::scores::ScoreTable;
use crate::algorithm::slicer::slice_shreds;
use crate::io::configuration::DEFAULT_SHRED_WIDTH;
use crate::io::error::{Result, UnshredError};
use crate::spatial::PixelGrid;
use log::{debug, warn};
use std::fmt;

/// Steps reported while processing a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Cutting the image into shreds
    Slice,
    /// Building the border score table
    Score,
    /// Choosing neighbors and photo edges
    Resolve,
    /// Walking the neighbor chain
    Arrange,
    /// Encoding the result to disk
    Write,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 5] = [
        Self::Slice,
        Self::Score,
        Self::Resolve,
        Self::Arrange,
        Self::Write,
    ];

    /// One-based position among [`Stage::ALL`]
    pub const fn step(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slice => "slice",
            Self::Score => "score",
            Self::Resolve => "resolve",
            Self::Arrange => "arrange",
            Self::Write => "write",
        })
    }
}

/// Runtime settings for reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnshredConfig {
    /// Width of every shred in pixels
    pub shred_width: usize,
    /// Treat an incomplete chain as an error instead of writing a partial image
    pub strict: bool,
}

impl Default for UnshredConfig {
    fn default() -> Self {
        Self {
            shred_width: DEFAULT_SHRED_WIDTH,
            strict: false,
        }
    }
}

/// Result of a reconstruction run
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Reassembled image
    pub image: PixelGrid,
    /// Order the shreds were placed in
    pub chain: Chain,
    /// Claims and edges the order was derived from
    pub neighbors: NeighborMap,
}

impl Reconstruction {
    /// Shred indices from left to right
    pub fn order(&self) -> &[usize] {
        self.chain.order()
    }

    /// True when every shred was placed
    pub fn is_complete(&self) -> bool {
        self.chain.is_complete()
    }
}

/// Runs slicing, scoring, neighbor resolution, chain walking and reassembly
#[derive(Debug, Clone, Default)]
pub struct Unshredder {
    config: UnshredConfig,
}

impl Unshredder {
    /// Create an unshredder with the given settings
    pub const fn new(config: UnshredConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    pub const fn config(&self) -> &UnshredConfig {
        &self.config
    }

    /// Reconstruct `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shred width is zero or fewer than two shreds fit in the image
    /// - Neither photo edge could be identified
    /// - The chain is incomplete and strict mode is enabled
    pub fn run(&self, grid: &PixelGrid) -> Result<Reconstruction> {
        self.run_with_progress(grid, |_| {})
    }

    /// Reconstruct `grid`, calling `on_stage` as each stage begins
    ///
    /// [`Stage::Write`] is never reported here; writing is up to the caller.
    ///
    /// # Errors
    ///
    /// Same as [`Unshredder::run`]
    pub fn run_with_progress(
        &self,
        grid: &PixelGrid,
        mut on_stage: impl FnMut(Stage),
    ) -> Result<Reconstruction> {
        on_stage(Stage::Slice);
        let shreds = slice_shreds(grid, self.config.shred_width)?;
        debug!(
            "{}x{} image split into {} shreds of width {}",
            grid.width(),
            grid.height(),
            shreds.len(),
            self.config.shred_width
        );

        on_stage(Stage::Score);
        let scores = ScoreTable::from_shreds(&shreds);

        on_stage(Stage::Resolve);
        let neighbors = resolve_neighbors(&scores);

        on_stage(Stage::Arrange);
        let chain = build_chain(&neighbors)?;

        if !chain.is_complete() {
            if self.config.strict {
                return Err(UnshredError::BrokenChain {
                    expected: chain.expected(),
                    found: chain.order().len(),
                });
            }
            warn!(
                "neighbor chain placed {} of {} shreds, output will be incomplete",
                chain.order().len(),
                chain.expected()
            );
        }

        let image = reconstruct(chain.order(), &shreds);

        Ok(Reconstruction {
            image,
            chain,
            neighbors,
        })
    }
}
