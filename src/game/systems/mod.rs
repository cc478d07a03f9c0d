//! Game systems
//!
//! - `game_logic` - The snapshot reducer: selection, move commit, undo, reset
//!   and AI results

pub mod game_logic;

pub use game_logic::{reduce, try_reduce};
