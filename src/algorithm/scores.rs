//! Pairwise border dissimilarity between shreds

use crate::algorithm::slicer::Shred;
use ndarray::{Array2, ArrayView2};

/// Sum of absolute per-channel differences between two border columns
///
/// Columns are compared row by row; rows past the shorter column are ignored.
pub fn border_distance(a: ArrayView2<'_, u8>, b: ArrayView2<'_, u8>) -> u64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum()
}

type Border<'a> = Option<ArrayView2<'a, u8>>;

// Missing borders only occur for zero-width shreds, which the slicer never produces
fn pair_distance(a: Option<&Border<'_>>, b: Option<&Border<'_>>) -> u64 {
    match (a, b) {
        (Some(Some(a)), Some(Some(b))) => border_distance(a.view(), b.view()),
        _ => 0,
    }
}

/// Border dissimilarity for every ordered pair of distinct shreds
///
/// Lower scores are stronger evidence that two shreds were adjacent.
/// Diagonal entries are left at zero and never read through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    right: Array2<u64>,
    left: Array2<u64>,
}

impl ScoreTable {
    /// Compare every shred's borders against every other shred's opposite border
    pub fn from_shreds(shreds: &[Shred]) -> Self {
        let rights: Vec<Border<'_>> = shreds.iter().map(Shred::right_border).collect();
        let lefts: Vec<Border<'_>> = shreds.iter().map(Shred::left_border).collect();
        let n = shreds.len();

        // right[i][j]: i's right border against j's left border
        let right = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j { 0 } else { pair_distance(rights.get(i), lefts.get(j)) }
        });
        // left[i][j]: i's left border against j's right border
        let left = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j { 0 } else { pair_distance(lefts.get(i), rights.get(j)) }
        });

        Self { right, left }
    }

    /// Number of shreds scored
    pub fn len(&self) -> usize {
        self.right.nrows()
    }

    /// True when no shreds were scored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost of placing shred `j` immediately right of shred `i`
    pub fn right(&self, i: usize, j: usize) -> Option<u64> {
        (i != j).then(|| self.right.get([i, j]).copied()).flatten()
    }

    /// Cost of placing shred `j` immediately left of shred `i`
    pub fn left(&self, i: usize, j: usize) -> Option<u64> {
        (i != j).then(|| self.left.get([i, j]).copied()).flatten()
    }

    /// Scores of every candidate right of `i`, excluding `i` itself
    pub fn right_candidates(&self, i: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        (0..self.len()).filter_map(move |j| self.right(i, j).map(|score| (j, score)))
    }

    /// Scores of every candidate left of `i`, excluding `i` itself
    pub fn left_candidates(&self, i: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        (0..self.len()).filter_map(move |j| self.left(i, j).map(|score| (j, score)))
    }
}
