//! Move history
//!
//! Append-only chronological record of committed moves. It is the only game
//! state kept besides the board, and it is what undo works from: the board
//! for any earlier point is rebuilt by replaying a prefix of the history from
//! the starting layout (see [`crate::api::replay`]). Moves are never
//! un-applied in place, since a capture cannot be reversed from the board
//! alone.
//!
//! Index 0 is Blue's first move, index 1 Red's reply, and so on.

use crate::types::Move;

/// Ordered list of all moves made since the game started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed move
    pub fn add_move(&mut self, record: Move) {
        self.moves.push(record);
    }

    /// Most recent move, `None` at game start
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of plies played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at a zero-based ply index
    pub fn get_move(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Remove every move (new game)
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Copy holding only the first `count` moves
    pub fn truncated(&self, count: usize) -> MoveHistory {
        MoveHistory {
            moves: self.moves[..count.min(self.moves.len())].to_vec(),
        }
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveHistory {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
