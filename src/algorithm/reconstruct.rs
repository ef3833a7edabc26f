//! Reassembling shreds into a single image

use crate::algorithm::slicer::Shred;
use crate::spatial::PixelGrid;
use log::debug;
use ndarray::{Array3, ArrayView3, Axis, concatenate};

/// Place shreds side by side in `order`, left to right
///
/// Each output row is the concatenation of that row from every listed shred,
/// so the result is `order.len() * width` pixels wide. Indices with no
/// matching shred are skipped. An empty order, or shreds of differing
/// heights, give a zero-width image.
pub fn reconstruct(order: &[usize], shreds: &[Shred]) -> PixelGrid {
    let views: Vec<ArrayView3<'_, u8>> = order
        .iter()
        .filter_map(|&i| shreds.get(i))
        .map(|shred| shred.pixels().pixels().view())
        .collect();

    let height = shreds.first().map_or(0, Shred::height);
    // Fails only for an empty order or shreds not cut from the same image
    let pixels = concatenate(Axis(1), &views).unwrap_or_else(|error| {
        debug!("no shreds placed for order {order:?}: {error}");
        Array3::zeros((height, 0, 3))
    });

    PixelGrid::from_array(pixels).unwrap_or_else(|| PixelGrid::new(0, height))
}
