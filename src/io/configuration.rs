//! Default values and fixed limits for shred reconstruction

/// Shred width in pixels when none is given on the command line
pub const DEFAULT_SHRED_WIDTH: usize = 32;

// A single shred has nothing to be ordered against
/// Fewest shreds an image must split into
pub const MIN_SHREDS: usize = 2;

// Output settings
/// Suffix inserted before the extension of reconstructed images
pub const OUTPUT_SUFFIX: &str = "_unshredded";
/// Suffix inserted before the extension of shuffled images
pub const SHREDDED_SUFFIX: &str = "_shredded";
/// Encoding used when the output path has no recognised extension
pub const FALLBACK_FORMAT: image::ImageFormat = image::ImageFormat::Png;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of the per-file stage bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 20;
