//! Interactive text play between humans and/or the random engine.
//!
//! The session prints the board, reads a vertex from the side to move and
//! feeds it to [`GameState`]. Rejected moves are reported and the same side is
//! asked again. Engine seats answer immediately with [`RandomEngine`].

use std::io::{self, BufRead, Write};

use crate::board::Stone;
use crate::coordinate::Vertex;
use crate::engine::RandomEngine;
use crate::game::GameState;

/// Who chooses moves for one color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Engine,
}

/// Games longer than this many moves per board point are cut off.
const MAX_MOVES_PER_POINT: usize = 3;

pub struct Session {
    game: GameState,
    seats: [Seat; 2],
    engine: RandomEngine,
}

impl Session {
    pub fn new(game: GameState, black: Seat, white: Seat, engine: RandomEngine) -> Self {
        Self {
            game,
            seats: [black, white],
            engine,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn seat(&self, stone: Stone) -> Seat {
        self.seats[stone.index()]
    }

    /// Play until both sides pass, a human quits, input ends or the move
    /// limit is reached.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let limit = self.game.size() * self.game.size() * MAX_MOVES_PER_POINT;

        while !self.game.is_over() {
            if self.game.move_number() >= limit {
                writeln!(out, "Move limit of {limit} reached.")?;
                break;
            }

            let turn = self.game.current_turn();
            match self.seat(turn) {
                Seat::Engine => {
                    let vertex = self.engine.select_move(&self.game);
                    match self.game.play(vertex) {
                        Ok(_) => writeln!(out, "{turn} plays {vertex}")?,
                        Err(e) => {
                            tracing::warn!(%vertex, error = %e, "engine move rejected, passing");
                            self.game.play(Vertex::Pass).map_err(io::Error::other)?;
                        }
                    }
                }
                Seat::Human => {
                    self.print_board(&mut out)?;
                    write!(out, "{turn} to move (vertex, 'pass', 'undo' or 'quit'): ")?;
                    out.flush()?;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        writeln!(out)?;
                        return Ok(());
                    }
                    let command = line.trim();
                    match command.to_ascii_lowercase().as_str() {
                        "q" | "quit" => return Ok(()),
                        "undo" => self.undo(&mut out)?,
                        _ => match Vertex::parse(command).and_then(|v| self.game.play(v)) {
                            Ok(report) if report.count() > 0 => {
                                writeln!(out, "{turn} captures {}", report.count())?
                            }
                            Ok(_) => {}
                            Err(e) => writeln!(out, "{e}")?,
                        },
                    }
                }
            }
        }

        self.print_board(&mut out)?;
        if self.game.is_over() {
            writeln!(out, "Both players passed. Game over.")?;
        }
        Ok(())
    }

    /// Take back moves until a human is to move again.
    fn undo<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        loop {
            match self.game.undo() {
                Ok(record) => writeln!(out, "Took back {}", record.mv)?,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    return Ok(());
                }
            }
            if self.seat(self.game.current_turn()) == Seat::Human {
                return Ok(());
            }
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", self.game.render())?;
        writeln!(
            out,
            "Captures: black {}, white {}",
            self.game.captures(Stone::Black),
            self.game.captures(Stone::White)
        )
    }
}
