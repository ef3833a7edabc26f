//! Producing shredded test images from intact ones

use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::slicer::slice_shreds;
use crate::io::error::Result;
use crate::spatial::PixelGrid;
use rand::Rng;
use rand::seq::SliceRandom;

/// Cut `grid` into shreds and lay them out in a random order
///
/// Returns the shuffled image and its placement: `placement[k]` is the
/// original index of the shred now at position `k`. Remainder columns that do
/// not fill a whole shred are dropped.
///
/// # Errors
///
/// Returns an error if `shred_width` is zero or the image holds fewer than two shreds
pub fn shuffle_shreds<R: Rng + ?Sized>(
    grid: &PixelGrid,
    shred_width: usize,
    rng: &mut R,
) -> Result<(PixelGrid, Vec<usize>)> {
    let shreds = slice_shreds(grid, shred_width)?;
    let mut placement: Vec<usize> = (0..shreds.len()).collect();
    placement.shuffle(rng);

    Ok((reconstruct(&placement, &shreds), placement))
}

/// Lay out the shreds of `grid` in an explicit `placement`
///
/// # Errors
///
/// Returns an error if `shred_width` is zero or the image holds fewer than two shreds
pub fn arrange_shreds(
    grid: &PixelGrid,
    shred_width: usize,
    placement: &[usize],
) -> Result<PixelGrid> {
    let shreds = slice_shreds(grid, shred_width)?;
    Ok(reconstruct(placement, &shreds))
}

/// Order that undoes `placement`: position of original shred 0, then 1, and so on
pub fn inverse_placement(placement: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; placement.len()];
    for (position, &original) in placement.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(original) {
            *slot = position;
        }
    }
    inverse
}
