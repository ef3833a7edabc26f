//! Reconstruction of vertically shredded images
//!
//! An image cut into equal-width vertical strips and shuffled is put back
//! together by scoring how well every strip's edge pixels match every other
//! strip's opposite edge, detecting which strips sat on the photo's borders,
//! and chaining best matches from there.

#![deny(unsafe_code)]

/// Matching engine: slicing, scoring, neighbor resolution and reassembly
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Pixel storage
pub mod spatial;

pub use algorithm::pipeline::{Reconstruction, UnshredConfig, Unshredder};
pub use io::error::{Result, UnshredError};
pub use spatial::PixelGrid;
