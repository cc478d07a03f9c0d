//! Game module - Turn orchestration around the rule engine
//!
//! The engine knows the rules; this module knows whose turn it is, what the
//! player has selected, when the AI should think and how to take moves back.
//!
//! ## Module Organization
//!
//! - `state` - [`GameSnapshot`], the immutable view handed to front-ends
//! - `events` - [`GameAction`], every input the game reacts to
//! - `systems` - The reducer turning a snapshot and an action into the next snapshot
//! - `ai` - Game mode, difficulty descriptions and the async AI runner
//! - `error` - [`GameError`] for rejected actions
//!
//! # Flow
//!
//! ```text
//! terminal input ─┐
//!                 ├─> GameAction ─> reduce(snapshot, action, settings) ─> GameSnapshot
//! AiRunner task ──┘
//! ```
//!
//! Every snapshot carries a `generation` counter. Undo and new game bump it,
//! and an AI result tagged with an older generation is dropped.

pub mod ai;
pub mod error;
pub mod events;
pub mod state;
pub mod systems;

pub use error::{GameError, GameResult};
pub use events::GameAction;
pub use state::GameSnapshot;
pub use systems::{reduce, try_reduce};
