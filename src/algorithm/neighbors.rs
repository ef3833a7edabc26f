//! Best-neighbor claims and photo edge detection
//!
//! Every shred claims the lowest-scoring shred on each side as its neighbor.
//! A shred on the photo's true edge has no real neighbor on that side, so its
//! claim lands on a shred that already has a genuine claimant. Those duplicate
//! claims are how the edges are found.

use crate::algorithm::scores::ScoreTable;
use log::{debug, warn};
use std::fmt;

/// Which side of a shred a claim refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Neighbor immediately to the left
    Left,
    /// Neighbor immediately to the right
    Right,
}

impl Side {
    /// The other side
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A shred's choice of neighbor on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborClaim {
    /// Index of the claimed neighbor
    pub shred: usize,
    /// Border dissimilarity between the two shreds
    pub score: u64,
}

/// Claims held by one shred; `None` marks a photo edge on that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// Claimed left neighbor
    pub left: Option<NeighborClaim>,
    /// Claimed right neighbor
    pub right: Option<NeighborClaim>,
}

impl Neighbors {
    /// Claim on the given side
    pub const fn on(&self, side: Side) -> Option<NeighborClaim> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    const fn clear(&mut self, side: Side) {
        match side {
            Side::Left => self.left = None,
            Side::Right => self.right = None,
        }
    }
}

/// Outcome of edge detection on one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeResolution {
    /// Every claim on this side targets a distinct shred
    NoCollision,
    /// Two shreds claimed the same neighbor; `edge` held the weaker claim
    Resolved {
        /// Shred identified as the photo edge
        edge: usize,
        /// Shred whose claim on the same target was kept
        kept: usize,
    },
    /// More than two shreds are involved in duplicate claims
    Ambiguous {
        /// Every shred whose claim collides with another
        claimants: Vec<usize>,
    },
}

impl EdgeResolution {
    /// Shred identified as the edge, if any
    pub const fn edge(&self) -> Option<usize> {
        match self {
            Self::Resolved { edge, .. } => Some(*edge),
            Self::NoCollision | Self::Ambiguous { .. } => None,
        }
    }
}

/// Resolved claims for every shred plus the detected photo edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborMap {
    claims: Vec<Neighbors>,
    left: EdgeResolution,
    right: EdgeResolution,
}

impl NeighborMap {
    /// Detect photo edges among already chosen claims
    ///
    /// Left edges are resolved before right edges; clearing a claim on one side
    /// never affects the other.
    pub fn from_claims(mut claims: Vec<Neighbors>) -> Self {
        let left = resolve_edge(&mut claims, Side::Left);
        let right = resolve_edge(&mut claims, Side::Right);

        Self {
            claims,
            left,
            right,
        }
    }

    /// Per-shred claims, indexed by shred
    pub fn claims(&self) -> &[Neighbors] {
        &self.claims
    }

    /// Claims of a single shred
    pub fn get(&self, shred: usize) -> Option<&Neighbors> {
        self.claims.get(shred)
    }

    /// Number of shreds
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// True when there are no shreds
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Edge detection outcome for one side
    pub const fn resolution(&self, side: Side) -> &EdgeResolution {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Shred with no left neighbor, if one was identified
    pub const fn left_edge(&self) -> Option<usize> {
        self.left.edge()
    }

    /// Shred with no right neighbor, if one was identified
    pub const fn right_edge(&self) -> Option<usize> {
        self.right.edge()
    }
}

/// Lowest-scoring candidate on each side of every shred, self excluded
///
/// Ties go to the lowest candidate index.
pub fn best_claims(scores: &ScoreTable) -> Vec<Neighbors> {
    let best = |candidates: &mut dyn Iterator<Item = (usize, u64)>| {
        candidates
            .min_by_key(|&(_, score)| score)
            .map(|(shred, score)| NeighborClaim { shred, score })
    };

    (0..scores.len())
        .map(|i| Neighbors {
            left: best(&mut scores.left_candidates(i)),
            right: best(&mut scores.right_candidates(i)),
        })
        .collect()
}

/// Shreds whose claim on `side` targets a shred that someone else also claims
///
/// Returned in ascending shred order.
pub fn collision_set(claims: &[Neighbors], side: Side) -> Vec<usize> {
    let mut claimant_counts = vec![0usize; claims.len()];
    for claim in claims.iter().filter_map(|n| n.on(side)) {
        if let Some(count) = claimant_counts.get_mut(claim.shred) {
            *count += 1;
        }
    }

    claims
        .iter()
        .enumerate()
        .filter(|(_, n)| {
            n.on(side)
                .and_then(|claim| claimant_counts.get(claim.shred))
                .is_some_and(|&count| count > 1)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Pick the edge among colliding claimants and clear its claim on `side`
///
/// Only a pair of claimants is resolved: the one with the higher score is the
/// edge, and on equal scores the lower index is. Larger collision sets are
/// reported as ambiguous and left untouched.
pub fn resolve_edge(claims: &mut [Neighbors], side: Side) -> EdgeResolution {
    let colliding = collision_set(claims, side);

    let (first, second) = match colliding.as_slice() {
        [] => return EdgeResolution::NoCollision,
        &[first, second] => (first, second),
        _ => {
            warn!(
                "{} claims of {} shreds collide, skipping {side} edge detection",
                colliding.len(),
                claims.len()
            );
            return EdgeResolution::Ambiguous {
                claimants: colliding,
            };
        }
    };

    let score_of = |i: usize| {
        claims
            .get(i)
            .and_then(|n| n.on(side))
            .map_or(u64::MAX, |claim| claim.score)
    };

    let (edge, kept) = if score_of(first) < score_of(second) {
        (second, first)
    } else {
        (first, second)
    };

    if let Some(neighbors) = claims.get_mut(edge) {
        neighbors.clear(side);
    }
    debug!("shred {edge} is the {side} edge (kept claim of shred {kept})");

    EdgeResolution::Resolved { edge, kept }
}

/// Choose best neighbors for every shred and identify the photo edges
pub fn resolve_neighbors(scores: &ScoreTable) -> NeighborMap {
    let claims = best_claims(scores);
    for (i, n) in claims.iter().enumerate() {
        debug!("shred {i}: left {:?}, right {:?}", n.left, n.right);
    }

    NeighborMap::from_claims(claims)
}
