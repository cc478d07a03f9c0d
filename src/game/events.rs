//! Game actions
//!
//! Everything that can change a [`crate::game::GameSnapshot`] arrives as a
//! [`GameAction`]. Terminal commands map to the first three variants; the
//! AI runner produces the last two.

use jungle_engine::{Coord, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Player clicked a cell: select, re-select, move or deselect
    SelectCell(Coord),

    /// Take back the last move (last two against the AI)
    Undo,

    /// Throw the game away and start from the initial layout
    NewGame,

    /// AI task spawned for the given generation
    AiThinking { generation: u64 },

    /// AI task finished. `mv` is `None` when the AI had no legal move.
    AiMoveReady { generation: u64, mv: Option<Move> },
}
