//! Integration tests for goban
//!
//! These exercise the public API end to end: notation, captures, suicide,
//! ko, undo and rendering, played through `GameState` the way a front-end
//! would drive it.

use goban::board::{Grid, Stone};
use goban::chain::find_chain;
use goban::constants::MAX_SIZE;
use goban::coordinate::{Coordinate, Vertex};
use goban::error::Error;
use goban::game::{GameConfig, GameState};
use goban::resolver::{KoRule, Move};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn pt(s: &str) -> Coordinate {
    Coordinate::parse(s).unwrap()
}

/// Play a sequence of moves on a new game, alternating from Black.
/// "pass" can be used to pass.
fn setup_game(size: usize, moves: &[&str]) -> GameState {
    let mut game = GameState::new(size, 7.5).unwrap();
    for mv in moves {
        let vertex = Vertex::parse(mv).unwrap();
        if let Err(e) = game.play(vertex) {
            panic!("Illegal move {mv} in setup: {e}");
        }
    }
    game
}

/// Place black and white stones alternately, passing for the side that has
/// run out. Mirrors a free setup while keeping turn order honest.
fn setpos(size: usize, black: &[&str], white: &[&str]) -> GameState {
    let mut moves = Vec::new();
    for i in 0..black.len().max(white.len()) {
        moves.push(black.get(i).copied().unwrap_or("pass"));
        moves.push(white.get(i).copied().unwrap_or("pass"));
    }
    setup_game(size, &moves)
}

// =============================================================================
// Coordinate notation
// =============================================================================

#[test]
fn test_coordinate_roundtrip_all_points() {
    for row in 1..=MAX_SIZE {
        for col in 1..=MAX_SIZE {
            let c = Coordinate::new(col, row, MAX_SIZE).unwrap();
            assert_eq!(Coordinate::parse(&c.to_string()).unwrap(), c, "Roundtrip failed for {c}");
        }
    }
}

#[test]
fn test_coordinate_skips_i() {
    let h5 = pt("H5");
    let j5 = pt("J5");
    assert_eq!(j5.col() - h5.col(), 1, "J should be one column after H (skipping I)");
    assert!(matches!(Coordinate::parse("I5"), Err(Error::InvalidFormat(_))));
}

#[test]
fn test_coordinate_row_one_is_bottom() {
    let game = setup_game(9, &["A1"]);
    let text = game.render();
    let bottom_row = text.lines().nth(9).unwrap();
    assert_eq!(bottom_row, "1  X . . . . . . . .  1");
}

#[test]
fn test_parse_pass() {
    assert_eq!(Vertex::parse("pass").unwrap(), Vertex::Pass);
    assert_eq!(Vertex::parse("PASS").unwrap(), Vertex::Pass);
    assert_eq!(Vertex::parse("Pass").unwrap(), Vertex::Pass);
}

// =============================================================================
// Stones and occupied points
// =============================================================================

#[test]
fn test_other_involution() {
    assert_eq!(Stone::Black.other().other(), Stone::Black);
    assert_eq!(Stone::White.other().other(), Stone::White);
}

#[test]
fn test_occupied_point_any_color() {
    let mut game = setup_game(9, &["E5"]);
    assert_eq!(
        game.submit_move(Move::play(Stone::White, pt("E5"))),
        Err(Error::OccupiedPoint(pt("E5")))
    );
    game.play(Vertex::Pass).unwrap();
    assert_eq!(
        game.submit_move(Move::play(Stone::Black, pt("E5"))),
        Err(Error::OccupiedPoint(pt("E5")))
    );
}

#[test]
fn test_move_off_board() {
    let mut game = GameState::new(9, 7.5).unwrap();
    assert!(matches!(
        game.play(Vertex::Point(pt("K10"))),
        Err(Error::OutOfRange { size: 9, .. })
    ));
    assert_eq!(game.move_number(), 0);
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_single_stone() {
    // White E5 with Black on three sides; Black E4 takes the last liberty.
    let mut game = setpos(9, &["D5", "F5", "E6"], &["E5", "A9", "J9"]);
    assert_eq!(game.current_turn(), Stone::Black);

    let report = game.play(Vertex::Point(pt("E4"))).unwrap();
    assert_eq!(report.captured, vec![pt("E5")]);
    assert_eq!(game.grid().get(pt("E5")).unwrap(), None);
    assert_eq!(game.captures(Stone::Black), 1);
    assert_eq!(game.captures(Stone::White), 0);
}

#[test]
fn test_capture_edge_group() {
    // White B1-C1 on the edge, surrounded by A1, B2, C2, D1.
    let mut game = setpos(9, &["A1", "B2", "C2"], &["B1", "C1", "J9"]);
    let report = game.play(Vertex::Point(pt("D1"))).unwrap();
    assert_eq!(report.captured, vec![pt("B1"), pt("C1")]);
    assert_eq!(game.captures(Stone::Black), 2);
}

#[test]
fn test_capture_two_groups_one_move() {
    let mut game = setpos(9, &["A2", "C2", "D1"], &["A1", "C1", "J9"]);
    let report = game.play(Vertex::Point(pt("B1"))).unwrap();
    assert_eq!(report.count(), 2);
    assert_eq!(game.grid().count(Stone::White), 1);
}

#[test]
fn test_capture_restores_liberties() {
    let mut game = setpos(9, &["D5", "F5", "E6"], &["E5", "A9", "J9"]);
    game.play(Vertex::Point(pt("E4"))).unwrap();
    let chain = find_chain(game.grid(), pt("E4")).unwrap();
    assert!(chain.liberties.contains(&pt("E5")));
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_single_point() {
    let mut game = setup_game(9, &["D5", "A9", "F5", "J9", "E6", "J1", "E4"]);
    assert_eq!(game.current_turn(), Stone::White);
    let before = game.grid().clone();
    assert_eq!(game.play(Vertex::Point(pt("E5"))), Err(Error::SuicideMove(pt("E5"))));
    assert_eq!(*game.grid(), before);
    assert_eq!(game.move_number(), 7);
}

#[test]
fn test_suicide_in_corner() {
    let mut game = setup_game(9, &["A2", "H8", "B1"]);
    let result = game.play(Vertex::Point(pt("A1")));
    assert_eq!(result, Err(Error::SuicideMove(pt("A1"))));
}

#[test]
fn test_capture_is_not_suicide() {
    let mut game = setpos(9, &["B2", "C1"], &["A2", "B1"]);
    // Black A1 has no empty neighbor but captures B1.
    let report = game.play(Vertex::Point(pt("A1"))).unwrap();
    assert_eq!(report.captured, vec![pt("B1")]);
}

// =============================================================================
// Ko
// =============================================================================

/// Classic ko: Black's mouth at D5 (C5, D4, D6), White's at E5 (E4, E6, F5).
/// White D5 is then captured by Black E5.
const KO_MOVES: [&str; 9] = ["C5", "E4", "D4", "E6", "D6", "F5", "A9", "D5", "E5"];

#[test]
fn test_ko_immediate_retake_rejected() {
    let mut game = setup_game(9, &KO_MOVES);
    assert_eq!(game.captures(Stone::Black), 1);
    let before = game.grid().clone();

    assert_eq!(game.play(Vertex::Point(pt("D5"))), Err(Error::KoViolation(pt("D5"))));
    assert_eq!(*game.grid(), before);
    assert_eq!(game.move_number(), KO_MOVES.len());
    assert_eq!(game.current_turn(), Stone::White);
}

#[test]
fn test_ko_retake_after_threat() {
    let mut game = setup_game(9, &KO_MOVES);
    game.play(Vertex::Point(pt("J1"))).unwrap();
    game.play(Vertex::Point(pt("J2"))).unwrap();
    let report = game.play(Vertex::Point(pt("D5"))).unwrap();
    assert_eq!(report.captured, vec![pt("E5")]);

    // Now Black may not retake immediately either.
    assert_eq!(game.play(Vertex::Point(pt("E5"))), Err(Error::KoViolation(pt("E5"))));
}

#[test]
fn test_ko_cleared_by_pass() {
    let mut game = setup_game(9, &KO_MOVES);
    game.play(Vertex::Pass).unwrap();
    game.play(Vertex::Pass).unwrap();
    // Two passes: White retaking no longer restores the previous position.
    assert!(game.play(Vertex::Point(pt("D5"))).is_ok());
}

#[test]
fn test_superko_blocks_cycle() {
    let mut game = GameState::with_config(GameConfig {
        size: 9,
        komi: 7.5,
        ko_rule: KoRule::PositionalSuperko,
    })
    .unwrap();
    for mv in KO_MOVES {
        game.play(Vertex::parse(mv).unwrap()).unwrap();
    }
    game.play(Vertex::Pass).unwrap();
    game.play(Vertex::Pass).unwrap();
    // The retake recreates the position before Black E5, which superko
    // remembers even after the passes.
    assert_eq!(game.play(Vertex::Point(pt("D5"))), Err(Error::KoViolation(pt("D5"))));
}

// =============================================================================
// Turn order and undo
// =============================================================================

#[test]
fn test_wrong_turn_keeps_history() {
    let mut game = setup_game(9, &["C3"]);
    let result = game.submit_move(Move::play(Stone::Black, pt("D4")));
    assert!(matches!(result, Err(Error::TurnError { .. })));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_undo_restores_every_position() {
    let moves = ["D5", "E5", "F5", "A9", "E6", "J9", "E4", "pass", "D4"];
    let mut game = GameState::new(9, 7.5).unwrap();
    let mut positions: Vec<Grid> = Vec::new();
    for mv in moves {
        positions.push(game.grid().clone());
        game.play(Vertex::parse(mv).unwrap()).unwrap();
    }
    assert_eq!(game.captures(Stone::Black), 1);

    while let Some(expected) = positions.pop() {
        game.undo().unwrap();
        assert_eq!(*game.grid(), expected, "after undoing to move {}", positions.len());
    }
    assert_eq!(game.undo(), Err(Error::NothingToUndo));
    assert_eq!(game.captures(Stone::Black), 0);
    assert_eq!(game.current_turn(), Stone::Black);
}

#[test]
fn test_undo_restores_captured_group() {
    let mut game = setpos(9, &["A1", "B2", "C2"], &["B1", "C1", "J9"]);
    let before = game.grid().clone();
    game.play(Vertex::Point(pt("D1"))).unwrap();
    assert_eq!(game.grid().count(Stone::White), 1);

    let record = game.undo().unwrap();
    assert_eq!(record.report.count(), 2);
    assert_eq!(*game.grid(), before);
    assert_eq!(game.captures(Stone::Black), 0);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_end_to_end() {
    let mut game = GameState::new(9, 7.5).unwrap();
    game.submit_move(Move::play(Stone::Black, pt("c3"))).unwrap();
    game.submit_move(Move::play(Stone::White, pt("c4"))).unwrap();
    game.submit_move(Move::play(Stone::Black, pt("d4"))).unwrap();

    let expected = [
        "   A B C D E F G H J",
        "9  . . . . . . . . .  9",
        "8  . . . . . . . . .  8",
        "7  . . . . . . . . .  7",
        "6  . . . . . . . . .  6",
        "5  . . . . . . . . .  5",
        "4  . . O X . . . . .  4",
        "3  . . X . . . . . .  3",
        "2  . . . . . . . . .  2",
        "1  . . . . . . . . .  1",
        "   A B C D E F G H J",
    ]
    .join("\n")
        + "\n";
    assert_eq!(game.render(), expected);
}

#[test]
fn test_render_stones_under_letters() {
    let game = setup_game(19, &["a1", "t19", "k10"]);
    let text = game.render();
    let lines: Vec<&str> = text.lines().collect();
    let header = lines[0];
    for (line, col, symbol) in [(lines[19], 'A', 'X'), (lines[1], 'T', 'O'), (lines[10], 'K', 'X')] {
        assert_eq!(header.find(col), line.find(symbol), "{symbol} should sit under {col}");
    }
    assert_eq!(lines[20], header);
}
