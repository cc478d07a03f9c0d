//! Typed command parsing

use jungle_engine::{Coord, Rank};
use thiserror::Error;

use crate::game::GameAction;
use crate::ui::labels::rank_from_name;

/// A line of terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Goes to the reducer
    Action(GameAction),
    /// Rules for one animal, or all of them
    Rules(Option<Rank>),
    Help,
    /// Redraw the board (empty line)
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command `{0}`. Type `help` for the list.")]
    UnknownCommand(String),

    #[error("Expected a row and a column, e.g. `2 0`")]
    BadCoordinate,

    #[error("Unknown animal `{0}`")]
    UnknownAnimal(String),
}

/// Parse one line of input.
///
/// Coordinates are not range-checked here; an off-board cell is rejected by
/// the reducer like any other bad click.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    let Some(first) = tokens.first() else {
        return Ok(Command::Show);
    };

    if first.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return parse_coordinate(&tokens).map(|coord| Command::Action(GameAction::SelectCell(coord)));
    }

    match first.to_ascii_lowercase().as_str() {
        "undo" | "u" => Ok(Command::Action(GameAction::Undo)),
        "new" | "reset" => Ok(Command::Action(GameAction::NewGame)),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "rules" | "r" => match tokens.get(1) {
            None => Ok(Command::Rules(None)),
            Some(name) => rank_from_name(name)
                .map(|rank| Command::Rules(Some(rank)))
                .ok_or_else(|| InputError::UnknownAnimal(name.to_string())),
        },
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn parse_coordinate(tokens: &[&str]) -> Result<Coord, InputError> {
    match tokens {
        [row, col] => {
            let row = row.parse::<i8>().map_err(|_| InputError::BadCoordinate)?;
            let col = col.parse::<i8>().map_err(|_| InputError::BadCoordinate)?;
            Ok(Coord::new(row, col))
        }
        _ => Err(InputError::BadCoordinate),
    }
}
