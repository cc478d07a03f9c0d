//! Legal move generation
//!
//! Generates destinations for a single piece, and full move lists for a
//! faction. Every occupied destination is settled by [`may_capture`].
//!
//! ## Terrain handling per direction
//!
//! - Off-board and own-den destinations are dropped.
//! - River destinations: the rat swims in, the tiger and lion leap the whole
//!   run (see [`leap_destination`]), every other rank is stopped.
//! - Land, trap and den destinations: empty cells are free, occupied cells go
//!   through the capture rule.
//!
//! In the land branch the defender is always treated as out of the water.
//! Nothing but a rat can stand in a river cell, and a river cell reached by
//! stepping is handled by the river branch, so the flag cannot be true there
//! for any reachable board.

mod capture;
mod leap;

pub use capture::may_capture;
pub use leap::leap_destination;

use super::board::{is_den_of, is_river, is_trap_of, Board};
use super::constants::DIRECTIONS;
use super::types::*;

/// Generate all legal destinations for the piece at `from`.
///
/// Empty for empty or off-board cells. Order follows [`DIRECTIONS`].
pub fn legal_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    DIRECTIONS
        .iter()
        .filter_map(|&dir| destination_in_direction(board, from, piece, dir))
        .collect()
}

fn destination_in_direction(
    board: &Board,
    from: Coord,
    piece: Piece,
    (d_row, d_col): (i8, i8),
) -> Option<Coord> {
    let to = from.offset(d_row, d_col);
    if !to.is_valid() || is_den_of(to, piece.faction) {
        return None;
    }

    if is_river(to) {
        if piece.rank.can_swim() {
            return swim_into(board, from, to, piece);
        }
        if piece.rank.can_leap() {
            return leap_over(board, to, piece, (d_row, d_col));
        }
        return None;
    }

    match board.piece_at(to) {
        None => Some(to),
        Some(defender) => may_capture(
            piece,
            defender,
            is_trap_of(to, piece.faction),
            is_river(from),
            false,
        )
        .then_some(to),
    }
}

/// Rat entering or moving within the river
fn swim_into(board: &Board, from: Coord, to: Coord, rat: Piece) -> Option<Coord> {
    match board.piece_at(to) {
        None => Some(to),
        Some(defender) => may_capture(rat, defender, false, is_river(from), true).then_some(to),
    }
}

/// Tiger or lion jumping the river run that starts at `entry`
fn leap_over(board: &Board, entry: Coord, piece: Piece, dir: (i8, i8)) -> Option<Coord> {
    let landing = leap_destination(board, entry, dir)?;
    if is_den_of(landing, piece.faction) {
        return None;
    }

    match board.piece_at(landing) {
        None => Some(landing),
        Some(defender) => may_capture(
            piece,
            defender,
            is_trap_of(landing, piece.faction),
            false,
            false,
        )
        .then_some(landing),
    }
}

/// Generate every legal move for a faction, scanning its pieces row-major
pub fn generate_moves(board: &Board, faction: Faction) -> Vec<Move> {
    board
        .pieces_of(faction)
        .flat_map(|(from, piece)| {
            legal_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to, piece.rank, board.piece_at(to)))
        })
        .collect()
}

/// Check whether a faction has at least one legal move
pub fn has_any_move(board: &Board, faction: Faction) -> bool {
    board
        .pieces_of(faction)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}
