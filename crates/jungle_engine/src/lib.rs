//! # Jungle Engine
//!
//! Rule engine and move-selection AI for Jungle (Dou Shou Qi), the 9×7
//! animal capture game with rivers, traps and dens.
//!
//! ## Module Organization
//!
//! - `types` - Coordinates, factions, ranks, pieces, moves, statuses
//! - `constants` - Board geometry, starting layout and scoring weights
//! - `board` - Board model and the terrain classifier
//! - `move_gen` - Capture resolution and legal move generation (incl. river leaps)
//! - `evaluation` - Heuristic position scoring
//! - `search` - Single-ply greedy move selector with difficulty jitter
//! - `history` - Append-only move log
//! - `api` - Public entry points used by the game orchestrator
//! - `error` - Error types for the validated entry points
//!
//! Every query function is total: out-of-grid or empty coordinates yield
//! empty results instead of errors. Only [`api::try_apply_move`] and
//! [`api::replay`] return [`error::JungleEngineError`].

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod history;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{
    apply_move, initial_board, legal_moves, replay, select_move, status, terrain_of,
    try_apply_move,
};
pub use board::Board;
pub use error::{JungleEngineError, JungleEngineResult};
pub use history::MoveHistory;
pub use types::{Coord, Difficulty, Faction, GameStatus, Move, Piece, PieceId, Rank, Terrain};
