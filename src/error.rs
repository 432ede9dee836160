//! Error type shared by every layer of the library.

use thiserror::Error;

use crate::board::Stone;
use crate::coordinate::Coordinate;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text could not be read as a coordinate or vertex.
    #[error("invalid coordinate format: '{0}'")]
    InvalidFormat(String),

    /// Coordinate falls outside a board of the given size.
    #[error("coordinate ({col}, {row}) out of range for board size {size}")]
    OutOfRange { col: usize, row: usize, size: usize },

    #[error("invalid board size {0}, expected 2 to 19")]
    InvalidBoardSize(usize),

    #[error("illegal move: {0} is not empty")]
    OccupiedPoint(Coordinate),

    #[error("illegal move: {0} is suicide")]
    SuicideMove(Coordinate),

    #[error("illegal move: {0} retakes ko")]
    KoViolation(Coordinate),

    #[error("it is {expected}'s turn, not {got}'s")]
    TurnError { expected: Stone, got: Stone },

    /// Chain lookup seeded on an empty point. Only reachable through misuse
    /// of [`crate::chain::find_chain`].
    #[error("no stone at {0}")]
    EmptyPoint(Coordinate),

    #[error("no move to undo")]
    NothingToUndo,
}

impl Error {
    /// True for moves rejected by the rules of Go (as opposed to bad input).
    /// The same player is expected to try again.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Error::OccupiedPoint(_)
                | Error::SuicideMove(_)
                | Error::KoViolation(_)
                | Error::TurnError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_classification() {
        let pt = Coordinate::parse("D4").unwrap();
        assert!(Error::OccupiedPoint(pt).is_rule_violation());
        assert!(Error::KoViolation(pt).is_rule_violation());
        assert!(
            Error::TurnError {
                expected: Stone::Black,
                got: Stone::White
            }
            .is_rule_violation()
        );
        assert!(!Error::InvalidFormat("z9".into()).is_rule_violation());
        assert!(!Error::EmptyPoint(pt).is_rule_violation());
    }

    #[test]
    fn test_messages() {
        let pt = Coordinate::parse("c3").unwrap();
        assert_eq!(
            Error::SuicideMove(pt).to_string(),
            "illegal move: C3 is suicide"
        );
        assert_eq!(
            Error::TurnError {
                expected: Stone::Black,
                got: Stone::White
            }
            .to_string(),
            "it is black's turn, not white's"
        );
    }
}
