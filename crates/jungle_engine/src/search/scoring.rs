//! Candidate move scoring

use crate::board::Board;
use crate::constants::{CAPTURE_BONUS_PER_RANK, DEN_ENTRY_BONUS};
use crate::evaluation::evaluate;
use crate::types::*;

/// Deterministic part of a candidate's score for `side`:
/// evaluation of the resulting board, plus `captured rank × 50` for a
/// capture, plus 1000 for stepping into the opponent's den.
pub fn score_move(board: &Board, mv: &Move, side: Faction) -> i64 {
    let next = board.after_move(mv.from, mv.to);
    let mut score = evaluate(&next, side);

    if let Some(captured) = mv.captured {
        score += captured.rank.value() as i64 * CAPTURE_BONUS_PER_RANK;
    }

    if mv.to == side.opponent().den() {
        score += DEN_ENTRY_BONUS;
    }

    score
}
