//! Game sequencing: turn order, history, capture tallies and undo.
//!
//! [`GameState`] is the only owner of the grid during play. Every change goes
//! through [`GameState::submit_move`] or [`GameState::undo`]; a rejected move
//! leaves the whole state as it was.

use crate::board::{Grid, Stone};
use crate::constants::{DEFAULT_KOMI, DEFAULT_SIZE};
use crate::coordinate::{Coordinate, Vertex};
use crate::error::{Error, Result};
use crate::resolver::{self, CaptureReport, KoRule, Move};

/// Settings fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub komi: f32,
    pub ko_rule: KoRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            komi: DEFAULT_KOMI,
            ko_rule: KoRule::Simple,
        }
    }
}

/// An accepted move and what it removed from the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub report: CaptureReport,
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    turn: Stone,
    history: Vec<MoveRecord>,
    /// Grid before each accepted move, parallel to `history`. The last entry
    /// is the simple-ko snapshot for the side to move.
    snapshots: Vec<Grid>,
    /// Stones captured by Black and by White.
    captures: [u32; 2],
    komi: f32,
    ko_rule: KoRule,
}

impl GameState {
    /// A new game under simple ko. Black moves first.
    pub fn new(size: usize, komi: f32) -> Result<Self> {
        Self::with_config(GameConfig {
            size,
            komi,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(config.size)?,
            turn: Stone::Black,
            history: Vec::new(),
            snapshots: Vec::new(),
            captures: [0, 0],
            komi: config.komi,
            ko_rule: config.ko_rule,
        })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            komi: self.komi,
            ko_rule: self.ko_rule,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    pub fn ko_rule(&self) -> KoRule {
        self.ko_rule
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_turn(&self) -> Stone {
        self.turn
    }

    /// Stones captured so far by `stone`.
    pub fn captures(&self, stone: Stone) -> u32 {
        self.captures[stone.index()]
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of accepted moves, passes included.
    pub fn move_number(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Passes at the end of the history.
    pub fn consecutive_passes(&self) -> usize {
        self.history.iter().rev().take_while(|r| r.mv.is_pass()).count()
    }

    /// Both players have passed in a row.
    pub fn is_over(&self) -> bool {
        self.consecutive_passes() >= 2
    }

    /// Play a move for the side whose turn it is.
    ///
    /// # Errors
    /// - `TurnError` if `mv.stone` is not the side to move
    /// - `OutOfRange`, `OccupiedPoint`, `SuicideMove` or `KoViolation` from
    ///   [`resolver::apply`]
    ///
    /// On error the game is unchanged.
    pub fn submit_move(&mut self, mv: Move) -> Result<CaptureReport> {
        if mv.stone != self.turn {
            tracing::debug!(expected = %self.turn, got = %mv.stone, "rejected: wrong turn");
            return Err(Error::TurnError {
                expected: self.turn,
                got: mv.stone,
            });
        }

        let before = self.grid.clone();
        let report = resolver::apply_with_rule(&mut self.grid, mv, &self.snapshots, self.ko_rule)?;

        self.captures[mv.stone.index()] += report.count() as u32;
        self.snapshots.push(before);
        self.history.push(MoveRecord {
            mv,
            report: report.clone(),
        });
        self.turn = self.turn.other();

        tracing::debug!(n = self.history.len(), %mv, captured = report.count(), "move accepted");
        Ok(report)
    }

    /// Play `vertex` for the side to move.
    pub fn play(&mut self, vertex: Vertex) -> Result<CaptureReport> {
        self.submit_move(Move::new(self.turn, vertex))
    }

    /// Take back the last accepted move, restoring captured stones, capture
    /// tallies, turn and ko state.
    ///
    /// # Errors
    /// `NothingToUndo` if no move has been played.
    pub fn undo(&mut self) -> Result<MoveRecord> {
        let record = self.history.pop().ok_or(Error::NothingToUndo)?;
        self.snapshots.pop();

        let MoveRecord { mv, report } = &record;
        if let Vertex::Point(pt) = mv.vertex {
            self.grid.set(pt, None)?;
        }
        for &pt in &report.captured {
            self.grid.set(pt, Some(mv.stone.other()))?;
        }
        self.captures[mv.stone.index()] -= report.count() as u32;
        self.turn = mv.stone;

        tracing::debug!(n = self.history.len(), %mv, "move undone");
        Ok(record)
    }

    /// Whether `mv` would be accepted right now. Nothing is changed.
    pub fn is_legal(&self, mv: &Move) -> bool {
        if mv.stone != self.turn {
            return false;
        }
        let mut grid = self.grid.clone();
        resolver::apply_with_rule(&mut grid, *mv, &self.snapshots, self.ko_rule).is_ok()
    }

    /// Every point where the side to move may play.
    pub fn legal_points(&self) -> Vec<Coordinate> {
        self.grid
            .iter()
            .filter(|(pt, cell)| cell.is_none() && self.is_legal(&Move::play(self.turn, *pt)))
            .map(|(pt, _)| pt)
            .collect()
    }

    /// Empty the board and history, keeping size, komi and ko rule.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.turn = Stone::Black;
        self.history.clear();
        self.snapshots.clear();
        self.captures = [0, 0];
    }

    /// Text diagram of the board (see the `Display` impl of [`Grid`]).
    pub fn render(&self) -> String {
        self.grid.to_string()
    }
}
