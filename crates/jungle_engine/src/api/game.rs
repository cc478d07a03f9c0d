//! Game lifecycle
//!
//! Functions for creating the starting board and rebuilding earlier boards
//! from the move history.

use crate::board::{init_board, Board};
use crate::constants::FIRST_TO_MOVE;
use crate::error::{JungleEngineError, JungleEngineResult};
use crate::history::MoveHistory;
use crate::types::*;

/// Create the standard starting board: 16 pieces, one per rank per faction
pub fn initial_board() -> Board {
    init_board()
}

/// Replay the first `count` moves of `history` from the starting board.
///
/// Returns the board after those moves and the faction to move next. The
/// orchestrator decides how many moves to keep (one fewer to undo a single
/// ply, two fewer to undo an AI reply together with the human move before it).
///
/// # Errors
///
/// - [`JungleEngineError::ReplayOutOfRange`] if `count` exceeds the history
/// - [`JungleEngineError::NoPieceAt`] if a recorded move starts on an empty cell
pub fn replay(history: &MoveHistory, count: usize) -> JungleEngineResult<(Board, Faction)> {
    if count > history.len() {
        return Err(JungleEngineError::ReplayOutOfRange {
            requested: count,
            available: history.len(),
        });
    }

    let mut board = initial_board();
    let mut side = FIRST_TO_MOVE;

    for mv in history.iter().take(count) {
        if board.is_empty(mv.from) {
            return Err(JungleEngineError::NoPieceAt { coord: mv.from });
        }
        board = board.after_move(mv.from, mv.to);
        side = side.opponent();
    }

    Ok((board, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::try_apply_move;

    #[test]
    fn test_replay_zero_is_initial_board() {
        let history = MoveHistory::new();
        let (board, side) = replay(&history, 0).expect("empty replay");
        assert_eq!(board, initial_board());
        assert_eq!(side, Faction::Blue);
    }

    #[test]
    fn test_replay_reproduces_each_prefix() {
        let mut board = initial_board();
        let mut history = MoveHistory::new();
        let mut snapshots = vec![board];

        let plies = [
            (Coord::new(2, 0), Coord::new(3, 0)),
            (Coord::new(6, 6), Coord::new(5, 6)),
            (Coord::new(3, 0), Coord::new(3, 1)),
            (Coord::new(5, 6), Coord::new(5, 5)),
        ];
        for (from, to) in plies {
            let mv = try_apply_move(&board, from, to).expect("scripted move is legal");
            board = board.after_move(from, to);
            history.add_move(mv);
            snapshots.push(board);
        }

        for (count, expected) in snapshots.iter().enumerate() {
            let (replayed, side) = replay(&history, count).expect("prefix replays");
            assert_eq!(&replayed, expected);
            let expected_side = if count % 2 == 0 { Faction::Blue } else { Faction::Red };
            assert_eq!(side, expected_side);
        }
    }

    #[test]
    fn test_replay_out_of_range() {
        let history = MoveHistory::new();
        assert_eq!(
            replay(&history, 1),
            Err(JungleEngineError::ReplayOutOfRange {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_replay_rejects_corrupt_history() {
        let mut history = MoveHistory::new();
        history.add_move(Move::new(Coord::new(4, 3), Coord::new(5, 3), Rank::Dog, None));
        assert_eq!(
            replay(&history, 1),
            Err(JungleEngineError::NoPieceAt {
                coord: Coord::new(4, 3)
            })
        );
    }
}
