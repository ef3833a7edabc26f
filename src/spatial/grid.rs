//! RGB pixel grid shared by every pipeline stage

use image::{Rgb, RgbImage};
use ndarray::{Array3, ArrayView2, Axis, s};

/// Number of color channels kept per pixel
pub const CHANNELS: usize = 3;

/// Row-major RGB image stored as a (height, width, channel) array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array3<u8>,
}

impl PixelGrid {
    /// Create a black grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Wrap an existing (height, width, 3) array
    ///
    /// Returns `None` if the last axis does not hold exactly three channels.
    pub fn from_array(pixels: Array3<u8>) -> Option<Self> {
        (pixels.dim().2 == CHANNELS).then_some(Self { pixels })
    }

    /// Build a grid by evaluating `color` at every (x, y)
    pub fn from_fn(width: usize, height: usize, color: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, color(x, y));
            }
        }
        grid
    }

    /// Copy a decoded image into a grid
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let mut grid = Self::new(image.width() as usize, image.height() as usize);
        for (x, y, pixel) in image.enumerate_pixels() {
            grid.set(x as usize, y as usize, pixel.0);
        }
        grid
    }

    /// Convert back to an `image` buffer for encoding
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Rgb(self.get(x as usize, y as usize).unwrap_or([0, 0, 0]))
        })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Color at (x, y), or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        Some([
            *self.pixels.get([y, x, 0])?,
            *self.pixels.get([y, x, 1])?,
            *self.pixels.get([y, x, 2])?,
        ])
    }

    /// Overwrite the color at (x, y); writes outside the grid are ignored
    pub fn set(&mut self, x: usize, y: usize, color: [u8; 3]) {
        for (channel, value) in color.into_iter().enumerate() {
            if let Some(slot) = self.pixels.get_mut([y, x, channel]) {
                *slot = value;
            }
        }
    }

    /// View of column `x` as (height, channel), or `None` outside the grid
    pub fn column(&self, x: usize) -> Option<ArrayView2<'_, u8>> {
        (x < self.width()).then(|| self.pixels.index_axis(Axis(1), x))
    }

    /// Copy of the columns in `start..end`, or `None` if the range leaves the grid
    pub fn columns(&self, start: usize, end: usize) -> Option<Self> {
        (start <= end && end <= self.width()).then(|| Self {
            pixels: self.pixels.slice(s![.., start..end, ..]).to_owned(),
        })
    }

    /// Underlying (height, width, channel) array
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }
}
