//! Error types for game module
//!
//! Provides custom error types for rejected player and AI actions. The
//! reducer reports them through [`crate::game::try_reduce`]; the infallible
//! [`crate::game::reduce`] logs them and keeps the snapshot unchanged.

use jungle_engine::{Faction, GameStatus, JungleEngineError};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Invalid move attempted
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Action needs a game in progress
    #[error("Game is over ({status:?})")]
    GameOver { status: GameStatus },

    /// A human tried to act while the AI is to move
    #[error("It is not your turn: {faction} is played by the AI")]
    NotYourTurn { faction: Faction },

    /// Input arrived while the AI is choosing a move
    #[error("AI is thinking")]
    AiThinking,

    /// Undo with an empty history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// AI result computed for a board that has since been reset or rewound
    #[error("Stale AI result (generation {received}, current {current})")]
    StaleAiResult { received: u64, current: u64 },

    /// Engine rejected a move or replay
    #[error(transparent)]
    Engine(#[from] JungleEngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
