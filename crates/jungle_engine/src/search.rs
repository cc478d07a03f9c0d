//! Greedy move selection
//!
//! This module implements the AI opponent as a single-ply search:
//! - Enumerate every legal move for the side to move
//! - Score the board each move leads to with the position evaluator
//! - Add capture and den-entry bonuses
//! - Add uniform jitter whose amplitude depends on difficulty
//! - Return the highest total
//!
//! The opponent's reply is never considered. The jitter is what makes Easy
//! play weaker than Hard; there is no depth limit to tune.
//!
//! ## Module Organization
//!
//! - `scoring` - Deterministic score of a candidate move
//! - `select` - Candidate enumeration, jitter and selection

mod scoring;
mod select;

pub use scoring::score_move;
pub use select::{select_move, select_move_with_rng};
