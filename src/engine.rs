//! Legal-random move selection.
//!
//! The engine picks uniformly among legal points for the side to move, never
//! filling one of its own single-point eyes, and passes when nothing is left.
//! This keeps engine-vs-engine games finite without any playing strength.

use crate::board::{Grid, Stone};
use crate::coordinate::{Coordinate, Vertex};
use crate::game::GameState;
use crate::resolver::Move;

pub struct RandomEngine {
    rng: fastrand::Rng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    /// An engine seeded from the system.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A reproducible engine.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Choose a move for the side to move in `game`.
    pub fn select_move(&mut self, game: &GameState) -> Vertex {
        let stone = game.current_turn();
        let grid = game.grid();

        let mut candidates: Vec<Coordinate> = grid
            .iter()
            .filter(|(pt, cell)| cell.is_none() && !is_eye(grid, *pt, stone))
            .map(|(pt, _)| pt)
            .collect();
        self.rng.shuffle(&mut candidates);

        candidates
            .into_iter()
            .find(|&pt| game.is_legal(&Move::play(stone, pt)))
            .map_or(Vertex::Pass, Vertex::Point)
    }
}

/// Every on-board neighbor of `pt` holds a `stone`. May be a false eye.
pub fn is_eye(grid: &Grid, pt: Coordinate, stone: Stone) -> bool {
    grid.neighbors(pt).all(|n| grid.at(n) == Some(stone))
}
