//! Move selector

use rand::Rng;
use tracing::debug;

use super::scoring::score_move;
use crate::board::Board;
use crate::move_gen::generate_moves;
use crate::types::*;

/// Pick a move for `side` using the thread-local random generator.
///
/// Returns `None` when `side` has no legal move; the caller turns that into
/// a loss for `side`.
pub fn select_move(board: &Board, difficulty: Difficulty, side: Faction) -> Option<Move> {
    select_move_with_rng(board, difficulty, side, &mut rand::rng())
}

/// Pick a move for `side`, drawing jitter from `rng`.
///
/// Jitter is continuous in `[0, amplitude)`, so exact ties between
/// candidates do not arise and generation order carries no preference.
/// The returned move carries its total score (evaluation, bonuses and
/// jitter) rounded to the nearest integer.
pub fn select_move_with_rng<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    side: Faction,
    rng: &mut R,
) -> Option<Move> {
    let candidates = generate_moves(board, side);
    if candidates.is_empty() {
        debug!("[AI] {} has no legal move", side);
        return None;
    }

    let amplitude = difficulty.jitter_amplitude() as f64;
    let candidate_count = candidates.len();

    let best = candidates
        .into_iter()
        .map(|mv| {
            let jitter = if amplitude > 0.0 {
                rng.random::<f64>() * amplitude
            } else {
                0.0
            };
            let total = score_move(board, &mv, side) as f64 + jitter;
            (mv, total)
        })
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(mv, total)| mv.with_score(total.round() as i64));

    if let Some(mv) = &best {
        debug!(
            "[AI] {} picked {} from {} candidates (score {:?}, {:?})",
            side, mv, candidate_count, mv.score, difficulty
        );
    }

    best
}
