//! Jungle AI opponent
//!
//! Runs the engine's greedy move selector off the input loop so the
//! terminal stays responsive while the AI "thinks".
//!
//! # Architecture
//!
//! - [`GameMode`]: which faction (if any) the AI plays
//! - [`AiRunner`]: owns at most one [`PendingAiMove`] task
//! - The input loop asks the runner to spawn when it is the AI's turn, then
//!   feeds the finished result back through the reducer as a
//!   [`crate::game::GameAction::AiMoveReady`]
//!
//! The snapshot is the source of truth. The AI works on a copy of the board
//! and its move goes through the same validation as a human click.

pub mod resource;
pub mod systems;

// Re-export for convenience
pub use resource::{difficulty_description, GameMode};
pub use systems::{should_skip_ai_spawn, AiRunner, PendingAiMove};
