//! Ordering shreds by walking best-neighbor claims from a photo edge

use crate::algorithm::neighbors::{NeighborMap, Neighbors, Side};
use crate::io::error::{Result, UnshredError};
use bitvec::prelude::*;
use log::debug;

/// Which photo edge the order was grown from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Started at the left edge and appended rightwards
    LeftEdge,
    /// Started at the right edge and prepended leftwards
    RightEdge,
}

/// Left-to-right shred order produced by a chain walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    order: Vec<usize>,
    anchor: Anchor,
    expected: usize,
}

impl Chain {
    /// Shred indices from left to right
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Edge the walk started from
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Number of shreds the order should contain
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// True when every shred was placed
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.expected
    }
}

/// For every shred, the lowest-indexed shred whose claim on `side` targets it
pub fn claimants_by_target(claims: &[Neighbors], side: Side) -> Vec<Option<usize>> {
    let mut claimants = vec![None; claims.len()];
    for (i, neighbors) in claims.iter().enumerate() {
        if let Some(slot) = neighbors
            .on(side)
            .and_then(|claim| claimants.get_mut(claim.shred))
        {
            slot.get_or_insert(i);
        }
    }
    claimants
}

// Collects shreds moving away from `edge` in the `outward` direction
fn walk(map: &NeighborMap, edge: usize, outward: Side) -> Vec<usize> {
    let total = map.len();
    let mut visited = bitvec![0; total];
    let mut walked = Vec::with_capacity(total);

    let mut visit = |shred: usize, walked: &mut Vec<usize>| {
        if visited.get(shred).is_some_and(|seen| !*seen) {
            visited.set(shred, true);
            walked.push(shred);
            true
        } else {
            false
        }
    };

    visit(edge, &mut walked);

    let Some(first) = map.get(edge).and_then(|n| n.on(outward)) else {
        return walked;
    };
    if !visit(first.shred, &mut walked) {
        return walked;
    }

    // The next shred outward is the one claiming the current end as its inward neighbor
    let claimants = claimants_by_target(map.claims(), outward.opposite());
    for _ in 0..total.saturating_sub(2) {
        let next = walked
            .last()
            .and_then(|&end| claimants.get(end).copied().flatten());
        match next {
            Some(shred) if visit(shred, &mut walked) => {}
            _ => break,
        }
    }

    walked
}

/// Produce the left-to-right order from whichever photo edge was found
///
/// The left edge takes precedence. The returned chain may be incomplete when
/// a claim is missing or would revisit a placed shred; callers decide whether
/// that is fatal.
///
/// # Errors
///
/// Returns [`UnshredError::UnresolvedEdge`] if neither edge was identified
pub fn build_chain(map: &NeighborMap) -> Result<Chain> {
    let expected = map.len();

    let chain = if let Some(edge) = map.left_edge() {
        debug!("constructing from the left, starting at shred {edge}");
        Chain {
            order: walk(map, edge, Side::Right),
            anchor: Anchor::LeftEdge,
            expected,
        }
    } else if let Some(edge) = map.right_edge() {
        debug!("constructing from the right, starting at shred {edge}");
        let mut order = walk(map, edge, Side::Left);
        order.reverse();
        Chain {
            order,
            anchor: Anchor::RightEdge,
            expected,
        }
    } else {
        return Err(UnshredError::UnresolvedEdge { shreds: expected });
    };

    debug!("order {:?} ({} of {expected})", chain.order, chain.order.len());
    Ok(chain)
}
