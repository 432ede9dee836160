//! Move legality and capture resolution.
//!
//! A move is played on a working copy of the grid: the stone is placed,
//! opposing chains left without liberties are removed together, then suicide
//! and ko are checked. The caller's grid is only replaced once every check has
//! passed, so a rejected move leaves it untouched.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Grid, Stone};
use crate::chain::find_chain;
use crate::coordinate::{Coordinate, Vertex};
use crate::error::{Error, Result};

/// A stone color together with where it is played.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub stone: Stone,
    pub vertex: Vertex,
}

impl Move {
    pub fn new(stone: Stone, vertex: Vertex) -> Self {
        Self { stone, vertex }
    }

    pub fn play(stone: Stone, pt: Coordinate) -> Self {
        Self::new(stone, Vertex::Point(pt))
    }

    pub fn pass(stone: Stone) -> Self {
        Self::new(stone, Vertex::Pass)
    }

    pub fn is_pass(&self) -> bool {
        self.vertex.is_pass()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stone, self.vertex)
    }
}

/// Which repeated positions are forbidden.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KoRule {
    /// A single-stone capture may not restore the position from before the
    /// opponent's last move.
    #[default]
    Simple,
    /// No move may recreate any earlier position of the game.
    PositionalSuperko,
}

/// Stones removed by one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureReport {
    /// Color credited with the captures.
    pub mover: Stone,
    /// Removed stones (all of the mover's opposing color), ordered by row then
    /// column.
    pub captured: Vec<Coordinate>,
}

impl CaptureReport {
    pub fn empty(mover: Stone) -> Self {
        Self {
            mover,
            captured: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.captured.len()
    }

    /// Stones credited to `stone` by this move.
    pub fn credited(&self, stone: Stone) -> usize {
        if stone == self.mover { self.count() } else { 0 }
    }

    /// Stones of color `stone` removed from the board by this move.
    pub fn lost(&self, stone: Stone) -> usize {
        if stone == self.mover.other() { self.count() } else { 0 }
    }
}

/// Play `mv` on `grid` under simple ko.
///
/// `last_snapshot` is the grid as it stood before the opponent's last move;
/// `None` disables the ko check (first move of a game).
///
/// # Errors
/// - `OutOfRange` - the point is not on this grid
/// - `OccupiedPoint` - the point already holds a stone
/// - `SuicideMove` - the new chain would have no liberties after captures
/// - `KoViolation` - a single-stone capture would restore `last_snapshot`
pub fn apply(grid: &mut Grid, mv: Move, last_snapshot: Option<&Grid>) -> Result<CaptureReport> {
    let Vertex::Point(pt) = mv.vertex else {
        return Ok(CaptureReport::empty(mv.stone));
    };
    let (working, report) = resolve(grid, mv.stone, pt)?;

    if report.count() == 1 && last_snapshot.is_some_and(|prev| *prev == working) {
        tracing::debug!(%pt, stone = %mv.stone, "rejected: retakes ko");
        return Err(Error::KoViolation(pt));
    }

    *grid = working;
    Ok(report)
}

/// Play `mv` on `grid` under positional superko: the result may not equal
/// any grid in `history`.
pub fn apply_superko(grid: &mut Grid, mv: Move, history: &[Grid]) -> Result<CaptureReport> {
    let Vertex::Point(pt) = mv.vertex else {
        return Ok(CaptureReport::empty(mv.stone));
    };
    let (working, report) = resolve(grid, mv.stone, pt)?;

    if history.iter().any(|prev| *prev == working) {
        tracing::debug!(%pt, stone = %mv.stone, "rejected: repeats an earlier position");
        return Err(Error::KoViolation(pt));
    }

    *grid = working;
    Ok(report)
}

/// Play `mv` under the given rule. `history` holds every earlier position,
/// oldest first; simple ko only looks at the last one.
pub fn apply_with_rule(
    grid: &mut Grid,
    mv: Move,
    history: &[Grid],
    rule: KoRule,
) -> Result<CaptureReport> {
    match rule {
        KoRule::Simple => apply(grid, mv, history.last()),
        KoRule::PositionalSuperko => apply_superko(grid, mv, history),
    }
}

/// Place, capture and test for suicide on a copy of `grid`.
fn resolve(grid: &Grid, stone: Stone, pt: Coordinate) -> Result<(Grid, CaptureReport)> {
    if grid.get(pt)?.is_some() {
        tracing::debug!(%pt, %stone, "rejected: point not empty");
        return Err(Error::OccupiedPoint(pt));
    }

    let mut working = grid.clone();
    working.set(pt, Some(stone))?;

    let opp = stone.other();
    let mut to_remove: HashSet<Coordinate> = HashSet::new();
    for n in working.neighbors(pt) {
        if working.at(n) != Some(opp) || to_remove.contains(&n) {
            continue;
        }
        let chain = find_chain(&working, n)?;
        if chain.is_captured() {
            to_remove.extend(chain.members);
        }
    }

    for &r in &to_remove {
        working.set(r, None)?;
    }

    if find_chain(&working, pt)?.is_captured() {
        tracing::debug!(%pt, %stone, "rejected: suicide");
        return Err(Error::SuicideMove(pt));
    }

    let mut captured: Vec<Coordinate> = to_remove.into_iter().collect();
    captured.sort_by_key(|p| (p.row(), p.col()));
    if !captured.is_empty() {
        tracing::debug!(%pt, %stone, count = captured.len(), "captured stones");
    }

    Ok((working, CaptureReport { mover: stone, captured }))
}
