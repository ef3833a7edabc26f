//! Pixel storage shared by the I/O layer and the matching engine

/// RGB pixel grid backed by `ndarray`
pub mod grid;

pub use grid::PixelGrid;
