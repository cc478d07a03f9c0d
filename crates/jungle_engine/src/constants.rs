//! # Engine Constants - Board Geometry, Layout & Scoring Weights
//!
//! ## Board Geometry
//!
//! The board is 9 rows by 7 columns. Row 0 is Blue's home edge, row 8 is
//! Red's. Each home edge carries a den in the middle column, flanked by three
//! traps (left, right and in front of the den). Two 3×2 river blocks sit in
//! the middle rows, leaving land corridors in columns 0, 3 and 6.
//!
//! ```text
//!      0  1  2  3  4  5  6
//!  0   .  .  T  D  T  .  .     Blue
//!  1   .  .  .  T  .  .  .
//!  2   .  .  .  .  .  .  .
//!  3   .  ~  ~  .  ~  ~  .
//!  4   .  ~  ~  .  ~  ~  .
//!  5   .  ~  ~  .  ~  ~  .
//!  6   .  .  .  .  .  .  .
//!  7   .  .  .  T  .  .  .
//!  8   .  .  T  D  T  .  .     Red
//! ```
//!
//! ## Scoring Weights
//!
//! The evaluator values each piece at `rank × 10`, except the rat which is
//! worth a flat 15: it is the only piece that can swim and the only one that
//! can take the elephant. Positional value is `20 − distance` to the den
//! being attacked. The move selector adds `captured rank × 50` for captures
//! and 1000 for entering the enemy den, which dwarfs every other term.

use crate::types::{Coord, Faction, Rank};

/// Number of rows on the board
pub const BOARD_ROWS: usize = 9;

/// Number of columns on the board
pub const BOARD_COLS: usize = 7;

/// Maximum number of pieces on the board (8 per faction)
pub const MAX_PIECES: usize = 16;

/// Blue's den, on Blue's home edge
pub const BLUE_DEN: Coord = Coord::new(0, 3);

/// Red's den, on Red's home edge
pub const RED_DEN: Coord = Coord::new(8, 3);

/// Traps guarding Blue's den
pub const BLUE_TRAPS: [Coord; 3] = [Coord::new(0, 2), Coord::new(0, 4), Coord::new(1, 3)];

/// Traps guarding Red's den
pub const RED_TRAPS: [Coord; 3] = [Coord::new(8, 2), Coord::new(8, 4), Coord::new(7, 3)];

/// Rows covered by both river blocks (inclusive)
pub const RIVER_ROWS: (i8, i8) = (3, 5);

/// Column spans of the two river blocks (inclusive)
pub const RIVER_COLS: [(i8, i8); 2] = [(1, 2), (4, 5)];

/// Orthogonal step directions as (row delta, col delta).
///
/// Order is fixed (east, west, south, north) so generated move lists are
/// reproducible.
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Starting layout. Red's half is Blue's rotated 180° about the centre.
pub const SETUP: [(Coord, Rank, Faction); MAX_PIECES] = [
    (Coord::new(0, 0), Rank::Lion, Faction::Blue),
    (Coord::new(0, 6), Rank::Tiger, Faction::Blue),
    (Coord::new(1, 1), Rank::Dog, Faction::Blue),
    (Coord::new(1, 5), Rank::Cat, Faction::Blue),
    (Coord::new(2, 0), Rank::Rat, Faction::Blue),
    (Coord::new(2, 2), Rank::Leopard, Faction::Blue),
    (Coord::new(2, 4), Rank::Wolf, Faction::Blue),
    (Coord::new(2, 6), Rank::Elephant, Faction::Blue),
    (Coord::new(8, 6), Rank::Lion, Faction::Red),
    (Coord::new(8, 0), Rank::Tiger, Faction::Red),
    (Coord::new(7, 5), Rank::Dog, Faction::Red),
    (Coord::new(7, 1), Rank::Cat, Faction::Red),
    (Coord::new(6, 6), Rank::Rat, Faction::Red),
    (Coord::new(6, 4), Rank::Leopard, Faction::Red),
    (Coord::new(6, 2), Rank::Wolf, Faction::Red),
    (Coord::new(6, 0), Rank::Elephant, Faction::Red),
];

/// Faction that moves first in a new game
pub const FIRST_TO_MOVE: Faction = Faction::Blue;

// Evaluation weights

pub const MATERIAL_PER_RANK: i64 = 10;
pub const RAT_MATERIAL_VALUE: i64 = 15;
pub const POSITIONAL_BASE: i64 = 20;

// Move selector bonuses

pub const CAPTURE_BONUS_PER_RANK: i64 = 50;
pub const DEN_ENTRY_BONUS: i64 = 1000;

// Jitter amplitudes (exclusive upper bound of the uniform noise per move)

pub const JITTER_EASY: i64 = 50;
pub const JITTER_MEDIUM: i64 = 20;
pub const JITTER_HARD: i64 = 5;
