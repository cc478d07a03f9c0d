//! Move queries and execution

use crate::board::Board;
use crate::error::{JungleEngineError, JungleEngineResult};
use crate::move_gen;
use crate::types::*;

/// Terrain kind of a coordinate
pub fn terrain_of(coord: Coord) -> Terrain {
    crate::board::terrain_of(coord)
}

/// Legal destinations for the piece at `from`; empty for empty or
/// off-board cells
pub fn legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    move_gen::legal_moves(board, from)
}

/// Execute a move and return the resulting board.
///
/// Does not check legality: whatever stands on `mv.from` is moved to
/// `mv.to`. Use [`try_apply_move`] to validate untrusted input first. The
/// caller appends `mv` to its history.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    board.after_move(mv.from, mv.to)
}

/// Validate a move and build its record.
///
/// # Errors
///
/// - [`JungleEngineError::InvalidCoord`] if either coordinate is off the grid
/// - [`JungleEngineError::NoPieceAt`] if `from` is empty
/// - [`JungleEngineError::IllegalMove`] if `to` is not among the legal destinations
///
/// # Examples
///
/// ```
/// use jungle_engine::{initial_board, try_apply_move, apply_move, Coord};
///
/// let board = initial_board();
/// let mv = try_apply_move(&board, Coord::new(2, 0), Coord::new(3, 0)).unwrap();
/// let next = apply_move(&board, &mv);
/// assert!(next.is_empty(Coord::new(2, 0)));
/// ```
pub fn try_apply_move(board: &Board, from: Coord, to: Coord) -> JungleEngineResult<Move> {
    for coord in [from, to] {
        if !coord.is_valid() {
            return Err(JungleEngineError::InvalidCoord { coord });
        }
    }

    let piece = board
        .piece_at(from)
        .ok_or(JungleEngineError::NoPieceAt { coord: from })?;

    if !legal_moves(board, from).contains(&to) {
        return Err(JungleEngineError::IllegalMove { from, to });
    }

    Ok(Move::new(from, to, piece.rank, board.piece_at(to)))
}
