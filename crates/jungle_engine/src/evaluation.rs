//! Position evaluation
//!
//! Scores a board from one faction's point of view using:
//! - Material (rank × 10, the rat fixed at 15)
//! - Advancement (20 minus the distance to the den under attack)
//!
//! Pieces of the perspective faction add to the score, opposing pieces
//! subtract. There is no mobility or terrain term.
//!
//! ## Module Organization
//!
//! - `material` - Per-piece material values
//! - `position` - Advancement towards the attacked den

mod material;
mod position;

pub use material::{evaluate_material, material_value};
pub use position::{evaluate_advancement, positional_value};

use crate::board::Board;
use crate::types::Faction;

/// Evaluate a board for `perspective` (material + advancement)
pub fn evaluate(board: &Board, perspective: Faction) -> i64 {
    evaluate_material(board, perspective) + evaluate_advancement(board, perspective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::init_board;
    use crate::types::{Coord, Piece, Rank};

    #[test]
    fn test_starting_position_is_balanced_in_material() {
        let board = init_board();
        assert_eq!(evaluate_material(&board, Faction::Blue), 0);
        assert_eq!(evaluate_material(&board, Faction::Red), 0);
    }

    #[test]
    fn test_single_piece_score() {
        // Blue lion two rows in front of Red's den: 70 + (20 - 2)
        let board = Board::with_pieces(&[(Coord::new(6, 3), Piece::new(Rank::Lion, Faction::Blue))]);
        assert_eq!(evaluate(&board, Faction::Blue), 88);
        // From Red's side the same lion counts against, measured to Blue's den
        assert_eq!(evaluate(&board, Faction::Red), -(70 + (20 - 6)));
    }

    #[test]
    fn test_evaluate_is_sum_of_parts() {
        let board = init_board();
        for faction in Faction::ALL {
            assert_eq!(
                evaluate(&board, faction),
                evaluate_material(&board, faction) + evaluate_advancement(&board, faction)
            );
        }
    }
}
