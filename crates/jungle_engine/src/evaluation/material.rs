//! Material evaluation
//!
//! Evaluates the material balance of a board by summing piece values.

use crate::board::Board;
use crate::constants::{MATERIAL_PER_RANK, RAT_MATERIAL_VALUE};
use crate::types::*;

/// Material value of a single piece
#[inline]
pub fn material_value(rank: Rank) -> i64 {
    match rank {
        Rank::Rat => RAT_MATERIAL_VALUE,
        _ => rank.value() as i64 * MATERIAL_PER_RANK,
    }
}

/// Material balance from `perspective`'s side
pub fn evaluate_material(board: &Board, perspective: Faction) -> i64 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = material_value(piece.rank);
            if piece.faction == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::init_board;

    #[test]
    fn test_material_values() {
        assert_eq!(material_value(Rank::Rat), 15);
        assert_eq!(material_value(Rank::Cat), 20);
        assert_eq!(material_value(Rank::Elephant), 80);
    }

    #[test]
    fn test_blue_up_elephant() {
        let mut board = init_board();
        board.remove(Coord::new(6, 0));

        assert_eq!(evaluate_material(&board, Faction::Blue), 80);
        assert_eq!(evaluate_material(&board, Faction::Red), -80);
    }

    #[test]
    fn test_empty_board_material() {
        assert_eq!(evaluate_material(&Board::empty(), Faction::Blue), 0);
    }
}
