//! Constants for board geometry, scoring, and history capacity.
//!
//! Board size is chosen at runtime (see [`crate::point::BoardSize`]), so the
//! geometry constants here only describe the largest supported board.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the largest supported board.
pub const MAX_SIDE: usize = 19;

/// Number of bits a plane must hold: every point of a 19x19 board plus the
/// pass index.
pub const MAX_POINTS: usize = MAX_SIDE * MAX_SIDE + 1;

/// Number of 64-bit words backing one bit plane.
pub const PLANE_WORDS: usize = MAX_POINTS.div_ceil(64);

/// Number of stone colors (one bit plane each).
pub const PIECE_COUNT: usize = 2;

// =============================================================================
// Players
// =============================================================================

/// Turn identifier of the first player (black).
pub const SOUTH: i32 = 1;

/// Turn identifier of the second player (white).
pub const NORTH: i32 = -1;

/// Diagram symbol for black to move.
pub const SOUTH_SYMBOL: char = 'b';

/// Diagram symbol for white to move.
pub const NORTH_SYMBOL: char = 'w';

/// Diagram symbol of a black stone.
pub const BLACK_SYMBOL: char = 'X';

/// Diagram symbol of a white stone.
pub const WHITE_SYMBOL: char = 'O';

/// Printed symbol of an empty intersection.
pub const EMPTY_SYMBOL: char = '.';

/// Printed symbol of an empty star point.
pub const STAR_SYMBOL: char = '+';

/// Column letters. The letter `i` is skipped by convention.
pub const COLUMN_LETTERS: &[u8; MAX_SIDE] = b"abcdefghjklmnopqrst";

// =============================================================================
// Scoring
// =============================================================================

/// Default compensation added to white's score.
pub const DEFAULT_KOMI: f64 = 6.5;

/// Outcome score of a won game (negated for a loss).
pub const MAX_SCORE: i32 = 1000;

/// Outcome score of a drawn game.
pub const DRAW_SCORE: i32 = 0;

/// Recommended score to evaluate draws.
pub const CONTEMPT_SCORE: i32 = 0;

// =============================================================================
// History
// =============================================================================

/// Default number of plies the history can hold before growing.
pub const DEFAULT_CAPACITY: usize = 256;

/// Capacity grows at least this many plies each time.
pub const CAPACITY_INCREMENT: usize = 128;

/// Largest number of plies a history may store. Keeps the flat plane buffer
/// element count within `i32` range.
pub const MAX_CAPACITY: usize = i32::MAX as usize / (PLANE_WORDS * PIECE_COUNT);

/// Seed of the Zobrist key generator.
pub const RANDOM_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
