//! Board model and terrain classifier
//!
//! Provides fundamental board operations used throughout the engine:
//! - Terrain classification of any coordinate
//! - Trap and den ownership relative to a faction
//! - Piece placement, lookup and iteration
//! - The fixed starting layout

use super::constants::*;
use super::types::*;

/// Classify a coordinate. Total: off-board coordinates classify as land and
/// are rejected by the callers' bounds checks.
pub fn terrain_of(coord: Coord) -> Terrain {
    if coord == BLUE_DEN || coord == RED_DEN {
        Terrain::Den
    } else if BLUE_TRAPS.contains(&coord) || RED_TRAPS.contains(&coord) {
        Terrain::Trap
    } else if is_river(coord) {
        Terrain::River
    } else {
        Terrain::Land
    }
}

#[inline]
pub fn is_river(coord: Coord) -> bool {
    let (first_row, last_row) = RIVER_ROWS;
    coord.row >= first_row
        && coord.row <= last_row
        && RIVER_COLS
            .iter()
            .any(|&(first_col, last_col)| coord.col >= first_col && coord.col <= last_col)
}

/// Check if `coord` is a trap controlled by `faction` (one guarding its den)
#[inline]
pub fn is_trap_of(coord: Coord, faction: Faction) -> bool {
    terrain_of(coord) == Terrain::Trap && faction.controls_row(coord.row)
}

/// Check if `coord` is the den belonging to `faction`
#[inline]
pub fn is_den_of(coord: Coord, faction: Faction) -> bool {
    coord == faction.den()
}

/// 9×7 grid of optional pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Build a board from explicit placements. Later entries overwrite
    /// earlier ones on the same cell; off-board entries are ignored.
    pub fn with_pieces(placements: &[(Coord, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(coord, piece) in placements {
            board.place(coord, piece);
        }
        board
    }

    /// Get piece at coordinate. `None` for empty or off-board cells.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        let (row, col) = coord.index()?;
        self.cells[row][col]
    }

    /// Check if a cell is empty (off-board cells count as empty)
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Put a piece on a cell, returning what was there
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Option<Piece> {
        let (row, col) = coord.index()?;
        self.cells[row][col].replace(piece)
    }

    /// Clear a cell, returning what was there
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        let (row, col) = coord.index()?;
        self.cells[row][col].take()
    }

    /// All pieces in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coord::new(row as i8, col as i8), piece))
            })
        })
    }

    /// Pieces of one faction in row-major order
    pub fn pieces_of(&self, faction: Faction) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.faction == faction)
    }

    pub fn count(&self, faction: Faction) -> usize {
        self.pieces_of(faction).count()
    }

    /// Copy of the board with the piece on `from` moved to `to`, replacing
    /// whatever stood there. Unchanged if `from` is empty or `to` is off-board.
    pub fn after_move(&self, from: Coord, to: Coord) -> Board {
        let mut next = *self;
        if !to.is_valid() {
            return next;
        }
        if let Some(piece) = next.remove(from) {
            next.place(to, piece);
        }
        next
    }

    /// Locate a piece by identity
    pub fn find(&self, id: PieceId) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.id() == id)
            .map(|(coord, _)| coord)
    }
}

/// Initialize a board to the standard starting layout
pub fn init_board() -> Board {
    let mut board = Board::empty();
    for &(coord, rank, faction) in SETUP.iter() {
        board.place(coord, Piece::new(rank, faction));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dens_and_traps() {
        assert_eq!(terrain_of(Coord::new(0, 3)), Terrain::Den);
        assert_eq!(terrain_of(Coord::new(8, 3)), Terrain::Den);
        for coord in BLUE_TRAPS.iter().chain(RED_TRAPS.iter()) {
            assert_eq!(terrain_of(*coord), Terrain::Trap);
        }
        assert!(is_trap_of(Coord::new(1, 3), Faction::Blue));
        assert!(!is_trap_of(Coord::new(1, 3), Faction::Red));
        assert!(is_trap_of(Coord::new(7, 3), Faction::Red));
        assert!(!is_trap_of(Coord::new(2, 3), Faction::Blue));
    }

    #[test]
    fn test_river_blocks() {
        let river_cells = (0..BOARD_ROWS as i8)
            .flat_map(|row| (0..BOARD_COLS as i8).map(move |col| Coord::new(row, col)))
            .filter(|&coord| terrain_of(coord) == Terrain::River)
            .count();
        assert_eq!(river_cells, 12);
        assert_eq!(terrain_of(Coord::new(3, 1)), Terrain::River);
        assert_eq!(terrain_of(Coord::new(5, 5)), Terrain::River);
        assert_eq!(terrain_of(Coord::new(4, 3)), Terrain::Land);
        assert_eq!(terrain_of(Coord::new(3, 0)), Terrain::Land);
    }

    #[test]
    fn test_off_board_is_never_special() {
        for coord in [Coord::new(-1, 3), Coord::new(9, 3), Coord::new(4, -1), Coord::new(4, 7)] {
            assert_eq!(terrain_of(coord), Terrain::Land);
        }
    }

    #[test]
    fn test_initial_board_layout() {
        let board = init_board();
        assert_eq!(board.count(Faction::Blue), 8);
        assert_eq!(board.count(Faction::Red), 8);
        assert_eq!(
            board.piece_at(Coord::new(2, 0)),
            Some(Piece::new(Rank::Rat, Faction::Blue))
        );
        assert_eq!(
            board.piece_at(Coord::new(6, 0)),
            Some(Piece::new(Rank::Elephant, Faction::Red))
        );
    }

    #[test]
    fn test_off_board_access_is_harmless() {
        let mut board = init_board();
        assert_eq!(board.piece_at(Coord::new(-1, 0)), None);
        assert_eq!(board.remove(Coord::new(0, 9)), None);
        assert_eq!(
            board.place(Coord::new(12, 0), Piece::new(Rank::Cat, Faction::Red)),
            None
        );
        assert_eq!(board.pieces().count(), MAX_PIECES);
    }

    #[test]
    fn test_after_move_replaces_target() {
        let board = Board::with_pieces(&[
            (Coord::new(4, 3), Piece::new(Rank::Lion, Faction::Blue)),
            (Coord::new(5, 3), Piece::new(Rank::Wolf, Faction::Red)),
        ]);
        let next = board.after_move(Coord::new(4, 3), Coord::new(5, 3));
        assert!(next.is_empty(Coord::new(4, 3)));
        assert_eq!(
            next.piece_at(Coord::new(5, 3)),
            Some(Piece::new(Rank::Lion, Faction::Blue))
        );
        assert_eq!(next.count(Faction::Red), 0);
        // Source board untouched
        assert_eq!(board.count(Faction::Red), 1);
        assert_eq!(board.after_move(Coord::new(4, 3), Coord::new(9, 3)), board);
    }

    #[test]
    fn test_find_by_identity() {
        let board = init_board();
        let id = Piece::new(Rank::Lion, Faction::Red).id();
        assert_eq!(board.find(id), Some(Coord::new(8, 6)));
    }
}
