//! Error types for the Jungle engine
//!
//! Query functions never fail; these errors only come out of the validated
//! entry points ([`crate::api::try_apply_move`], [`crate::api::replay`]).

use thiserror::Error;

use crate::types::{Coord, Faction};

/// Errors that can occur in the Jungle engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JungleEngineError {
    /// Coordinate outside the 9×7 grid
    #[error("Invalid coordinate {coord} (rows 0-8, cols 0-6)")]
    InvalidCoord { coord: Coord },

    /// No piece at source cell
    #[error("No piece at source cell {coord}")]
    NoPieceAt { coord: Coord },

    /// Piece does not belong to the expected faction
    #[error("Piece at {coord} does not belong to {faction}")]
    WrongFaction { coord: Coord, faction: Faction },

    /// Destination not among the piece's legal moves
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// Asked to replay more moves than were recorded
    #[error("Cannot replay {requested} moves, history holds {available}")]
    ReplayOutOfRange { requested: usize, available: usize },
}

/// Result type alias for engine operations
pub type JungleEngineResult<T> = Result<T, JungleEngineError>;
