//! Core module - Application infrastructure
//!
//! Holds what the game needs before any board exists: user preferences and
//! the way they are stored between sessions.
//!
//! ## Module Organization
//!
//! - `resources` - [`GameSettings`] (mode, difficulty, AI delay, ply limit)
//! - `settings_persistence` - Load/save of `settings.json` in the user config dir
//! - `error` - [`CoreError`] for settings I/O
//!
//! # Error Handling
//!
//! Settings failures never stop a game. Loading falls back to defaults with a
//! warning and saving logs the error and carries on.

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::GameSettings;
pub use settings_persistence::{load_settings, save_settings};
