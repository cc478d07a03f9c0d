//! Terminal front-end
//!
//! Text rendering of the board, parsing of typed commands and the
//! command-line flags. Nothing in here changes game state directly: input
//! becomes a [`crate::game::GameAction`] and goes through the reducer.
//!
//! ## Module Organization
//!
//! - `labels` - Animal names, symbols and rules text
//! - `render` - Board and status line as text
//! - `input` - Typed commands (`2 0`, `undo`, `rules lion`, ...)
//! - `cli` - `clap` flags and how they override saved settings

pub mod cli;
pub mod input;
pub mod labels;
pub mod render;

pub use cli::Args;
pub use input::{parse_command, Command, InputError};
