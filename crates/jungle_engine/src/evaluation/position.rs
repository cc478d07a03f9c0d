//! Advancement evaluation
//!
//! Every piece on the board is measured against the den `perspective` is
//! attacking: its own pieces score higher the closer they get, and enemy
//! pieces are penalised the same way.

use crate::board::Board;
use crate::constants::POSITIONAL_BASE;
use crate::types::*;

/// Positional value of a piece standing on `coord` for an attack on `target_den`
#[inline]
pub fn positional_value(coord: Coord, target_den: Coord) -> i64 {
    POSITIONAL_BASE - coord.manhattan(target_den)
}

/// Advancement balance from `perspective`'s side
pub fn evaluate_advancement(board: &Board, perspective: Faction) -> i64 {
    let target_den = perspective.opponent().den();

    board
        .pieces()
        .map(|(coord, piece)| {
            let value = positional_value(coord, target_den);
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

    #[test]
    fn test_positional_value_shrinks_with_distance() {
        let den = Faction::Red.den();
        assert_eq!(positional_value(Coord::new(7, 3), den), 19);
        assert_eq!(positional_value(Coord::new(0, 0), den), 9);
        assert!(positional_value(Coord::new(0, 0), den) < positional_value(Coord::new(4, 3), den));
    }

    #[test]
    fn test_far_corner() {
        assert_eq!(positional_value(Coord::new(0, 0), Coord::new(8, 6)), 6);
    }

    #[test]
    fn test_advancement_counts_both_sides_against_same_den() {
        let board = Board::with_pieces(&[
            (Coord::new(7, 3), Piece::new(Rank::Cat, Faction::Blue)),
            (Coord::new(6, 3), Piece::new(Rank::Cat, Faction::Red)),
        ]);
        // Blue: +19, Red piece: -(20 - 2)
        assert_eq!(evaluate_advancement(&board, Faction::Blue), 1);
    }
}
