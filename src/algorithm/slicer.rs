//! Splitting an image into equal-width vertical shreds

use crate::io::configuration::MIN_SHREDS;
use crate::io::error::{Result, UnshredError};
use crate::spatial::PixelGrid;
use ndarray::ArrayView2;

/// One vertical strip of the source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shred {
    index: usize,
    pixels: PixelGrid,
}

impl Shred {
    /// Create a shred from its pixels and its left-to-right position in the source
    pub const fn new(index: usize, pixels: PixelGrid) -> Self {
        Self { index, pixels }
    }

    /// Position of this shred in the image it was cut from
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Pixel data owned by this shred
    pub const fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Leftmost pixel column as (row, channel)
    pub fn left_border(&self) -> Option<ArrayView2<'_, u8>> {
        self.pixels.column(0)
    }

    /// Rightmost pixel column as (row, channel)
    pub fn right_border(&self) -> Option<ArrayView2<'_, u8>> {
        self.pixels.column(self.width().checked_sub(1)?)
    }
}

/// Number of whole shreds of `shred_width` that fit in `image_width`
///
/// # Errors
///
/// Returns an error if `shred_width` is zero or fewer than two shreds fit
pub const fn shred_count(image_width: usize, shred_width: usize) -> Result<usize> {
    if shred_width == 0 {
        return Err(UnshredError::InvalidShredWidth { width: shred_width });
    }

    let shreds = image_width / shred_width;
    if shreds < MIN_SHREDS {
        return Err(UnshredError::TooFewShreds {
            image_width,
            shred_width,
            shreds,
        });
    }

    Ok(shreds)
}

/// Cut `grid` into `floor(width / shred_width)` shreds, dropping any remainder columns
///
/// # Errors
///
/// Returns an error if `shred_width` is zero or the image holds fewer than two shreds
pub fn slice_shreds(grid: &PixelGrid, shred_width: usize) -> Result<Vec<Shred>> {
    let shreds = shred_count(grid.width(), shred_width)?;

    Ok((0..shreds)
        .filter_map(|n| {
            let start = n * shred_width;
            grid.columns(start, start + shred_width)
                .map(|pixels| Shred::new(n, pixels))
        })
        .collect())
}
