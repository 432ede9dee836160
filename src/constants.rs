//! Constants for board geometry, notation and game defaults.
//!
//! Board size is chosen at runtime (see [`crate::game::GameConfig`]); the values
//! here bound it and provide the defaults used by the front-ends.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest supported board (NxN).
pub const MIN_SIZE: usize = 2;

/// Largest supported board. Also the bound used when parsing coordinates
/// without a board at hand.
pub const MAX_SIZE: usize = 19;

/// Board size used when none is given.
pub const DEFAULT_SIZE: usize = 19;

// =============================================================================
// Notation
// =============================================================================

/// Column letters, skipping 'I' (Go convention to avoid confusion with 'J').
pub const BOARD_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";

/// Vertex string used for a pass.
pub const PASS: &str = "pass";

// =============================================================================
// Game Defaults
// =============================================================================

/// Komi (compensation points for White).
pub const DEFAULT_KOMI: f32 = 7.5;

// =============================================================================
// Rendering
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
