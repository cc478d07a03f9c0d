//! River leaps for the tiger and lion

use crate::board::{is_river, Board};
use crate::types::Coord;

/// Landing cell of a leap that enters the river at `entry` heading
/// `(d_row, d_col)`.
///
/// Scans the contiguous river run straight ahead. Returns `None` if any river
/// cell on the way is occupied (a swimming rat blocks the jump) or if the run
/// ends at the board edge.
pub fn leap_destination(board: &Board, entry: Coord, (d_row, d_col): (i8, i8)) -> Option<Coord> {
    let mut current = entry;
    while current.is_valid() && is_river(current) {
        if !board.is_empty(current) {
            return None;
        }
        current = current.offset(d_row, d_col);
    }

    current.is_valid().then_some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Faction, Piece, Rank};

    #[test]
    fn test_vertical_leap_crosses_three_cells() {
        let board = Board::empty();
        assert_eq!(
            leap_destination(&board, Coord::new(3, 1), (1, 0)),
            Some(Coord::new(6, 1))
        );
        assert_eq!(
            leap_destination(&board, Coord::new(5, 4), (-1, 0)),
            Some(Coord::new(2, 4))
        );
    }

    #[test]
    fn test_horizontal_leap_crosses_two_cells() {
        let board = Board::empty();
        assert_eq!(
            leap_destination(&board, Coord::new(4, 1), (0, 1)),
            Some(Coord::new(4, 3))
        );
        assert_eq!(
            leap_destination(&board, Coord::new(4, 5), (0, -1)),
            Some(Coord::new(4, 3))
        );
    }

    #[test]
    fn test_swimmer_blocks_leap() {
        let board = Board::with_pieces(&[(Coord::new(4, 2), Piece::new(Rank::Rat, Faction::Red))]);
        assert_eq!(leap_destination(&board, Coord::new(3, 2), (1, 0)), None);
        // Own rat blocks just the same
        let board = Board::with_pieces(&[(Coord::new(5, 2), Piece::new(Rank::Rat, Faction::Blue))]);
        assert_eq!(leap_destination(&board, Coord::new(3, 2), (1, 0)), None);
    }
}
