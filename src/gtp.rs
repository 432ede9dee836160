//! Go Text Protocol (GTP) front-end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements GTP version 2 on top of [`GameState`], so the board
//! can be driven by graphical interfaces like Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start an empty game on a new size (2 to 19)
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Set komi
//! - `play <color> <vertex>` - Play a move; `color` must be the side to move
//! - `genmove <color>` - Pick a legal-random move for `color` and play it
//! - `undo` - Take back the last move
//! - `showboard` - Print the board diagram

use std::io::{self, BufRead, Write};

use crate::board::Stone;
use crate::coordinate::Vertex;
use crate::engine::RandomEngine;
use crate::game::{GameConfig, GameState};
use crate::resolver::Move;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    game: GameState,
    engine: RandomEngine,
}

impl GtpEngine {
    pub fn new(game: GameState, engine: RandomEngine) -> Self {
        Self { game, engine }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                let config = GameConfig {
                    size,
                    ..self.game.config()
                };
                match GameState::with_config(config) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.game.clear();
                (true, String::new())
            }

            "komi" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<f32>() {
                    Ok(komi) => {
                        // Komi is fixed per game; a new value starts a new one.
                        let config = GameConfig {
                            komi,
                            ..self.game.config()
                        };
                        if self.game.move_number() == 0 {
                            match GameState::with_config(config) {
                                Ok(game) => {
                                    self.game = game;
                                    (true, String::new())
                                }
                                Err(e) => (false, e.to_string()),
                            }
                        } else if komi == self.game.komi() {
                            (true, String::new())
                        } else {
                            (false, "cannot change komi during a game".to_string())
                        }
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(stone) = Stone::parse(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let vertex = match Vertex::parse(args[1]) {
                    Ok(v) => v,
                    Err(_) => return (false, "invalid vertex".to_string()),
                };
                match self.game.submit_move(Move::new(stone, vertex)) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(stone) = args.first().and_then(|a| Stone::parse(a)) else {
                    return (false, "invalid color".to_string());
                };
                if stone != self.game.current_turn() {
                    return (false, format!("it is {}'s turn", self.game.current_turn()));
                }

                let vertex = self.engine.select_move(&self.game);
                match self.game.play(vertex) {
                    Ok(_) => (true, vertex.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "undo" => match self.game.undo() {
                Ok(_) => (true, String::new()),
                Err(_) => (false, "cannot undo".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.game.render().trim_end())),

            _ => (false, "unknown command".to_string()),
        }
    }
}
