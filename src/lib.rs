//! Goban: the board and rules of Go.
//!
//! This crate places stones, finds chains and their liberties, resolves
//! captures, rejects suicide and ko, and keeps a game's history with undo.
//!
//! ## Modules
//!
//! - [`constants`] - Size limits, notation and defaults
//! - [`coordinate`] - Points and their `D4` / `4-4` notations
//! - [`board`] - Stone colors and the grid of cells
//! - [`chain`] - Connected groups and liberties
//! - [`resolver`] - Move legality, captures and ko
//! - [`game`] - Turn order, history, capture counts and undo
//! - [`engine`] - Legal-random move selection
//! - [`gtp`] - Go Text Protocol front-end
//! - [`session`] - Interactive text play
//!
//! ## Coordinates
//!
//! Column `A` is the left edge and row 1 the bottom edge; `I` is skipped.
//!
//! ## Example
//!
//! ```
//! use goban::board::Stone;
//! use goban::coordinate::Coordinate;
//! use goban::game::GameState;
//! use goban::resolver::Move;
//!
//! let mut game = GameState::new(9, 7.5)?;
//! game.submit_move(Move::play(Stone::Black, Coordinate::parse("c3")?))?;
//! game.submit_move(Move::play(Stone::White, Coordinate::parse("c4")?))?;
//! assert_eq!(game.current_turn(), Stone::Black);
//! print!("{}", game.render());
//! # Ok::<(), goban::error::Error>(())
//! ```

pub mod board;
pub mod chain;
pub mod constants;
pub mod coordinate;
pub mod engine;
pub mod error;
pub mod game;
pub mod gtp;
pub mod resolver;
pub mod session;

pub use board::{Grid, Stone};
pub use coordinate::{Coordinate, Vertex};
pub use error::{Error, Result};
pub use game::{GameConfig, GameState};
pub use resolver::{CaptureReport, KoRule, Move};
