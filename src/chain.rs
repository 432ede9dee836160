//! Connected groups of stones and their liberties.
//!
//! A chain is found by flood-fill over orthogonal adjacency with an explicit
//! worklist and a seen-set, so each point is processed at most once and the
//! search is bounded by the board area.

use std::collections::HashSet;

use crate::board::{Grid, Stone};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// A maximal set of same-colored, orthogonally connected stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    pub color: Stone,
    pub members: HashSet<Coordinate>,
    /// Empty points touching any member.
    pub liberties: HashSet<Coordinate>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn contains(&self, pt: Coordinate) -> bool {
        self.members.contains(&pt)
    }

    /// Members in a stable order (row, then column).
    pub fn sorted_members(&self) -> Vec<Coordinate> {
        let mut v: Vec<_> = self.members.iter().copied().collect();
        v.sort_by_key(|p| (p.row(), p.col()));
        v
    }
}

/// Collect the chain containing `seed` and its liberties.
///
/// # Errors
/// - `OutOfRange` if `seed` is off the board
/// - `EmptyPoint` if there is no stone at `seed`
pub fn find_chain(grid: &Grid, seed: Coordinate) -> Result<Chain> {
    let color = grid.get(seed)?.ok_or(Error::EmptyPoint(seed))?;

    let mut members = HashSet::new();
    let mut liberties = HashSet::new();
    let mut stack = vec![seed];
    members.insert(seed);

    while let Some(pt) = stack.pop() {
        for n in grid.neighbors(pt) {
            match grid.at(n) {
                None => {
                    liberties.insert(n);
                }
                Some(c) if c == color => {
                    if members.insert(n) {
                        stack.push(n);
                    }
                }
                Some(_) => {}
            }
        }
    }

    tracing::trace!(
        %seed,
        stones = members.len(),
        liberties = liberties.len(),
        "found chain"
    );

    Ok(Chain {
        color,
        members,
        liberties,
    })
}
