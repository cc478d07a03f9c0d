//! Game status queries and AI move generation

use crate::board::Board;
use crate::move_gen::has_any_move;
use crate::search;
use crate::types::*;

/// Decide whether the game is over after a move, given the side to move next.
///
/// Checked in order:
/// 1. A den occupied by the opposing faction: the occupier wins.
/// 2. A faction with no pieces left: the other faction wins.
/// 3. `next` has no legal move: the other faction wins.
/// 4. Otherwise the game goes on.
///
/// Never returns [`GameStatus::Draw`].
pub fn status(board: &Board, next: Faction) -> GameStatus {
    for owner in Faction::ALL {
        if let Some(occupant) = board.piece_at(owner.den()) {
            if occupant.faction != owner {
                return GameStatus::won_by(occupant.faction);
            }
        }
    }

    for faction in [Faction::Red, Faction::Blue] {
        if board.count(faction) == 0 {
            return GameStatus::won_by(faction.opponent());
        }
    }

    if !has_any_move(board, next) {
        return GameStatus::won_by(next.opponent());
    }

    GameStatus::Playing
}

/// Get the AI's move for `side`, or `None` if it has no legal move
pub fn select_move(board: &Board, difficulty: Difficulty, side: Faction) -> Option<Move> {
    search::select_move(board, difficulty, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::initial_board;

    #[test]
    fn test_new_game_is_playing() {
        assert_eq!(status(&initial_board(), Faction::Blue), GameStatus::Playing);
        assert_eq!(status(&initial_board(), Faction::Red), GameStatus::Playing);
    }

    #[test]
    fn test_den_entry_wins_regardless_of_material() {
        let mut board = initial_board();
        let intruder = board.remove(Coord::new(2, 0)).expect("blue rat");
        board.place(Coord::new(8, 3), intruder);

        assert_eq!(board.count(Faction::Red), 8);
        assert_eq!(status(&board, Faction::Red), GameStatus::BlueWon);
    }

    #[test]
    fn test_wiped_out_faction_loses() {
        let board = Board::with_pieces(&[(Coord::new(4, 3), Piece::new(Rank::Cat, Faction::Red))]);
        assert_eq!(status(&board, Faction::Blue), GameStatus::RedWon);
    }

    #[test]
    fn test_no_moves_is_a_loss_not_a_draw() {
        let board = Board::with_pieces(&[
            (Coord::new(0, 0), Piece::new(Rank::Cat, Faction::Blue)),
            (Coord::new(0, 1), Piece::new(Rank::Elephant, Faction::Red)),
            (Coord::new(1, 0), Piece::new(Rank::Elephant, Faction::Red)),
        ]);
        assert_eq!(status(&board, Faction::Blue), GameStatus::RedWon);
        assert_eq!(status(&board, Faction::Red), GameStatus::Playing);
    }
}
