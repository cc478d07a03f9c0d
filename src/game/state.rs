//! Game snapshot
//!
//! Immutable value describing everything a front-end needs to draw the game.
//! A new snapshot is produced for every accepted action; nothing is mutated
//! in place.

use jungle_engine::constants::FIRST_TO_MOVE;
use jungle_engine::{initial_board, Board, Coord, Faction, GameStatus, Move, MoveHistory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    /// Faction to move next
    pub turn: Faction,
    pub status: GameStatus,
    /// Cell of the piece the player has picked up
    pub selected: Option<Coord>,
    /// Legal destinations of the selected piece
    pub valid_moves: Vec<Coord>,
    pub history: MoveHistory,
    pub last_move: Option<Move>,
    /// An AI task is running for this snapshot's generation
    pub ai_thinking: bool,
    /// Bumped on undo and new game so late AI results can be recognised
    pub generation: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSnapshot {
    /// Fresh game at generation 0
    pub fn new() -> Self {
        Self::with_generation(0)
    }

    /// Fresh game at the given generation
    pub fn with_generation(generation: u64) -> Self {
        Self {
            board: initial_board(),
            turn: FIRST_TO_MOVE,
            status: GameStatus::Playing,
            selected: None,
            valid_moves: Vec::new(),
            history: MoveHistory::new(),
            last_move: None,
            ai_thinking: false,
            generation,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Number of plies played so far
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check if `coord` is a legal destination of the current selection
    pub fn is_valid_target(&self, coord: Coord) -> bool {
        self.valid_moves.contains(&coord)
    }
}
