//! Goban: play Go in the terminal or over GTP.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban play --mode pve` - Play against the random engine
//! - `goban gtp` - Start GTP server for GUI integration
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use goban::constants::{DEFAULT_KOMI, DEFAULT_SIZE};
use goban::engine::RandomEngine;
use goban::gtp::GtpEngine;
use goban::session::{Seat, Session};
use goban::{Coordinate, GameConfig, GameState, KoRule, Move, Stone};

/// Goban: the board and rules of Go
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp(GameArgs),
    /// Play an interactive game in the terminal
    Play {
        #[command(flatten)]
        game: GameArgs,
        /// Who sits at the board
        #[arg(long, value_enum, default_value_t = Mode::Pvp)]
        mode: Mode,
        /// Your color in a game against the engine
        #[arg(long, value_enum, default_value_t = Color::Black)]
        color: Color,
    },
    /// Run a short demo game
    Demo,
}

#[derive(Args)]
struct GameArgs {
    /// Board size (2 to 19)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Komi (compensation points for White)
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f32,
    /// Forbid any repeated position instead of only immediate ko recapture
    #[arg(long)]
    superko: bool,
    /// Seed for the random engine
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            komi: self.komi,
            ko_rule: if self.superko {
                KoRule::PositionalSuperko
            } else {
                KoRule::Simple
            },
        }
    }

    fn engine(&self) -> RandomEngine {
        self.seed.map_or_else(RandomEngine::new, RandomEngine::with_seed)
    }

    fn new_game(&self) -> Result<GameState> {
        GameState::with_config(self.config()).context("invalid game settings")
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    /// Two humans
    Pvp,
    /// Human against the engine
    Pve,
    /// Engine against itself
    Eve,
}

#[derive(Copy, Clone, ValueEnum)]
enum Color {
    Black,
    White,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp(args)) => {
            let mut engine = GtpEngine::new(args.new_game()?, args.engine());
            engine
                .run(io::stdin().lock(), io::stdout().lock())
                .context("GTP session failed")
        }
        Some(Commands::Play { game, mode, color }) => {
            let (black, white) = match (mode, color) {
                (Mode::Pvp, _) => (Seat::Human, Seat::Human),
                (Mode::Pve, Color::Black) => (Seat::Human, Seat::Engine),
                (Mode::Pve, Color::White) => (Seat::Engine, Seat::Human),
                (Mode::Eve, _) => (Seat::Engine, Seat::Engine),
            };
            let mut session = Session::new(game.new_game()?, black, white, game.engine());
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("terminal session failed")
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Goban: the board and rules of Go\n");

    // Demo 1: a few hand-picked moves
    println!("=== Opening ===");
    let mut game = GameState::new(9, DEFAULT_KOMI)?;
    for (stone, vertex) in [(Stone::Black, "c3"), (Stone::White, "c4"), (Stone::Black, "d4")] {
        let pt = Coordinate::parse(vertex)?;
        game.submit_move(Move::play(stone, pt))?;
        println!("{stone} plays {pt}");
    }
    println!("{}", game.render());

    // Demo 2: random engine against itself
    println!("=== Random game ===");
    let mut game = GameState::new(9, DEFAULT_KOMI)?;
    let mut engine = RandomEngine::new();
    while !game.is_over() && game.move_number() < 9 * 9 * 3 {
        let vertex = engine.select_move(&game);
        game.play(vertex)?;
    }
    println!("{}", game.render());
    println!(
        "{} moves, captures: black {}, white {}",
        game.move_number(),
        game.captures(Stone::Black),
        game.captures(Stone::White)
    );
    Ok(())
}
