//! Public API for the Jungle engine
//!
//! The operations the game orchestrator and any front-end call.
//!
//! ## Module Organization
//!
//! - `game` - Starting board and replay-based undo (initial_board, replay)
//! - `moves` - Move queries and commits (terrain_of, legal_moves, apply_move, try_apply_move)
//! - `state` - Game status and AI move (status, select_move)

mod game;
mod moves;
mod state;

pub use game::{initial_board, replay};
pub use moves::{apply_move, legal_moves, terrain_of, try_apply_move};
pub use state::{select_move, status};
