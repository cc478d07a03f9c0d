//! # Engine Core Types
//!
//! ## Coordinates
//!
//! [`Coord`] uses signed components so that a step off the edge of the board
//! is still a representable value. Move generation computes neighbours
//! freely and rejects them with [`Coord::is_valid`] instead of guarding every
//! subtraction.
//!
//! ## Pieces and Identity
//!
//! Each faction owns exactly one animal per [`Rank`], so `(faction, rank)`
//! already identifies a piece for the whole game. [`PieceId`] makes that
//! identity explicit; it is never reused because captured pieces are removed
//! from the board, not recycled.
//!
//! ## Moves
//!
//! [`Move`] is both the commit unit passed to [`crate::api::apply_move`] and
//! the record stored in [`crate::history::MoveHistory`]. The `score` field is
//! only filled in by the AI and plays no part in legality.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    BLUE_DEN, BOARD_COLS, BOARD_ROWS, JITTER_EASY, JITTER_HARD, JITTER_MEDIUM, RED_DEN,
};

/// Board coordinate (row 0..=8, col 0..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Check if the coordinate lies on the 9×7 grid
    #[inline]
    pub fn is_valid(self) -> bool {
        self.row >= 0
            && (self.row as usize) < BOARD_ROWS
            && self.col >= 0
            && (self.col as usize) < BOARD_COLS
    }

    /// Neighbour in the given direction. May be off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Coord {
        Coord::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Manhattan distance between two coordinates
    pub fn manhattan(self, other: Coord) -> i64 {
        (self.row as i64 - other.row as i64).abs() + (self.col as i64 - other.col as i64).abs()
    }

    /// Array indices for a valid coordinate
    #[inline]
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the two opposing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Faction {
    /// Home edge on row 0, moves first
    Blue,
    /// Home edge on row 8
    Red,
}

impl Faction {
    pub const ALL: [Faction; 2] = [Faction::Blue, Faction::Red];

    pub fn opponent(self) -> Faction {
        match self {
            Faction::Blue => Faction::Red,
            Faction::Red => Faction::Blue,
        }
    }

    /// This faction's own den
    pub fn den(self) -> Coord {
        match self {
            Faction::Blue => BLUE_DEN,
            Faction::Red => RED_DEN,
        }
    }

    /// Whether a cell lies in this faction's half of the board.
    ///
    /// Traps are only ever on rows 0, 1, 7 and 8, so this is what decides
    /// which faction controls a trap.
    pub fn controls_row(self, row: i8) -> bool {
        let midline = (BOARD_ROWS / 2) as i8;
        match self {
            Faction::Blue => row < midline,
            Faction::Red => row > midline,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Faction::Blue => "Blue",
            Faction::Red => "Red",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Animal rank. Higher ranks capture lower ranks, with the rat/elephant
/// exceptions handled in [`crate::move_gen::may_capture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Rank {
    Rat = 1,
    Cat = 2,
    Dog = 3,
    Wolf = 4,
    Leopard = 5,
    Tiger = 6,
    Lion = 7,
    Elephant = 8,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Rat,
        Rank::Cat,
        Rank::Dog,
        Rank::Wolf,
        Rank::Leopard,
        Rank::Tiger,
        Rank::Lion,
        Rank::Elephant,
    ];

    pub const LOWEST: Rank = Rank::Rat;
    pub const HIGHEST: Rank = Rank::Elephant;

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(value.checked_sub(1)? as usize).copied()
    }

    /// Tiger and lion jump across rivers
    #[inline]
    pub fn can_leap(self) -> bool {
        matches!(self, Rank::Tiger | Rank::Lion)
    }

    /// Only the rat enters river cells
    #[inline]
    pub fn can_swim(self) -> bool {
        self == Rank::Rat
    }
}

/// Stable identity of a piece: one per faction and rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId {
    pub faction: Faction,
    pub rank: Rank,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faction = match self.faction {
            Faction::Blue => "blue",
            Faction::Red => "red",
        };
        write!(f, "{}-{}", faction, self.rank.value())
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub rank: Rank,
    pub faction: Faction,
}

impl Piece {
    pub const fn new(rank: Rank, faction: Faction) -> Self {
        Piece { rank, faction }
    }

    pub fn id(self) -> PieceId {
        PieceId {
            faction: self.faction,
            rank: self.rank,
        }
    }
}

/// Terrain kind of a cell. Derived from the coordinate, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Terrain {
    Land,
    River,
    Trap,
    Den,
}

/// A move: commit unit and history record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// Piece standing on `to` before the move, if any
    pub captured: Option<Piece>,
    /// Rank of the moving piece
    pub rank: Rank,
    /// AI score, `None` for human moves
    pub score: Option<i64>,
}

impl Move {
    pub fn new(from: Coord, to: Coord, rank: Rank, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            captured,
            rank,
            score: None,
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} -> {}", self.rank, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x {}", captured.id())?;
        }
        Ok(())
    }
}

/// Outcome of the game as seen after the latest committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    BlueWon,
    RedWon,
    /// Never produced by [`crate::api::status`]; see the orchestrator's
    /// optional ply limit.
    Draw,
}

impl GameStatus {
    pub fn won_by(faction: Faction) -> GameStatus {
        match faction {
            Faction::Blue => GameStatus::BlueWon,
            Faction::Red => GameStatus::RedWon,
        }
    }

    pub fn winner(self) -> Option<Faction> {
        match self {
            GameStatus::BlueWon => Some(Faction::Blue),
            GameStatus::RedWon => Some(Faction::Red),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }
}

/// AI strength. Controls only the amplitude of the random jitter added to
/// each candidate move's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Exclusive upper bound of the uniform jitter added per candidate move
    pub fn jitter_amplitude(self) -> i64 {
        match self {
            Difficulty::Easy => JITTER_EASY,
            Difficulty::Medium => JITTER_MEDIUM,
            Difficulty::Hard => JITTER_HARD,
        }
    }
}
