//! Text rendering
//!
//! Row 0 (Blue's home edge) is printed at the top, matching the coordinates
//! players type. Cells are five characters wide:
//!
//! ```text
//!  bRa    piece (faction marker + abbreviation)
//!  ~      empty cell, glyph by terrain
//! [bRa]   selected piece
//! *rEl*   legal destination of the selection
//! ```

use jungle_engine::constants::{BOARD_COLS, BOARD_ROWS};
use jungle_engine::{terrain_of, Coord, GameStatus, Rank};

use crate::core::GameSettings;
use crate::game::ai::difficulty_description;
use crate::game::ai::GameMode;
use crate::game::GameSnapshot;
use crate::ui::labels::{animal_abbrev, animal_name, faction_marker, rules_line, terrain_glyph};

/// Board grid with row and column indices
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_COLS {
        out.push_str(&format!("  {}  ", col));
    }
    out.push('\n');

    for row in 0..BOARD_ROWS as i8 {
        out.push_str(&format!(" {} ", row));
        for col in 0..BOARD_COLS as i8 {
            out.push_str(&render_cell(snapshot, Coord::new(row, col)));
        }
        out.push('\n');
    }
    out
}

fn render_cell(snapshot: &GameSnapshot, coord: Coord) -> String {
    let body = match snapshot.board.piece_at(coord) {
        Some(piece) => format!("{}{}", faction_marker(piece.faction), animal_abbrev(piece.rank)),
        None => format!(" {} ", terrain_glyph(terrain_of(coord))),
    };

    if snapshot.selected == Some(coord) {
        format!("[{}]", body)
    } else if snapshot.is_valid_target(coord) {
        format!("*{}*", body)
    } else {
        format!(" {} ", body)
    }
}

/// One-line summary of whose turn it is or how the game ended
pub fn render_status(snapshot: &GameSnapshot, settings: &GameSettings) -> String {
    match snapshot.status {
        GameStatus::Playing if snapshot.ai_thinking => {
            format!("{} (AI) is thinking...", snapshot.turn)
        }
        GameStatus::Playing => {
            let who = if settings.mode.is_ai_turn(snapshot.turn) {
                " (AI)"
            } else {
                ""
            };
            format!("{}{} to move (ply {})", snapshot.turn, who, snapshot.plies() + 1)
        }
        GameStatus::BlueWon | GameStatus::RedWon => match snapshot.status.winner() {
            Some(winner) => format!("{} wins! Type `new` to play again or `undo`.", winner),
            None => String::new(),
        },
        GameStatus::Draw => format!(
            "Draw after {} plies. Type `new` to play again.",
            snapshot.plies()
        ),
    }
}

/// Board, last move and status line
pub fn render(snapshot: &GameSnapshot, settings: &GameSettings) -> String {
    let mut out = render_board(snapshot);
    if let Some(mv) = snapshot.last_move {
        out.push_str(&format!(
            "Last move: {} {} -> {}",
            animal_name(mv.rank),
            mv.from,
            mv.to
        ));
        if let Some(captured) = mv.captured {
            out.push_str(&format!(" takes {} {}", captured.faction, animal_name(captured.rank)));
        }
        out.push('\n');
    }
    out.push_str(&render_status(snapshot, settings));
    out
}

pub fn render_welcome(settings: &GameSettings) -> String {
    let opponent = match settings.mode {
        GameMode::VsHuman => "Hot-seat game: two players share this terminal.".to_string(),
        GameMode::VsAi { ai_faction } => format!(
            "You play {} against the AI ({}).",
            ai_faction.opponent(),
            difficulty_description(settings.difficulty)
        ),
    };
    format!(
        "Jungle (Dou Shou Qi)\n{}\nType `help` for commands.\n",
        opponent
    )
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     <row> <col>    select one of your pieces, then type a highlighted cell to move\n  \
     undo           take back the last move (your move and the AI reply vs the AI)\n  \
     new            start a new game\n  \
     rules [animal] show how the animals move\n  \
     help           this text\n  \
     quit           leave\n\
     Legend: b/r = Blue/Red, ~ river, # trap, @ den, [..] selected, *..* legal target"
}

/// Rules for one animal, or all of them
pub fn rules(rank: Option<Rank>) -> String {
    match rank {
        Some(rank) => rules_line(rank),
        None => {
            let mut out = String::from(
                "Higher ranks capture equal or lower ones. Enter the enemy den (@) to win.\n\
                 A piece standing in an enemy trap (#) can be taken by anything.\n",
            );
            let lines: Vec<String> = Rank::ALL.into_iter().map(rules_line).collect();
            out.push_str(&lines.join("\n"));
            out
        }
    }
}
