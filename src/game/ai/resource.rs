//! AI configuration: game mode and difficulty descriptions
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players sharing one terminal (hot-seat)
//! - **VsAi**: One human player against the computer (specify AI faction)
//!
//! # Difficulty Levels
//!
//! Every level runs the same single-ply greedy search. Difficulty only sets
//! the amplitude of the random jitter added to each candidate's score:
//!
//! | Difficulty | Jitter   | Behaviour                                   |
//! |------------|----------|---------------------------------------------|
//! | Easy       | 0..50    | Often ignores a capture for a random step   |
//! | Medium     | 0..20    | Takes captures, positional play is loose    |
//! | Hard       | 0..5     | Nearly always the best-scoring move         |

use jungle_engine::{Difficulty, Faction};
use serde::{Deserialize, Serialize};

/// Who controls each faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    /// Human vs human on the same terminal
    VsHuman,

    /// Human vs AI opponent
    ///
    /// The specified faction is played by the engine; the other one takes
    /// input from the terminal.
    VsAi {
        /// The faction the AI plays
        ai_faction: Faction,
    },
}

impl Default for GameMode {
    /// Human plays Blue and moves first, the AI answers as Red
    fn default() -> Self {
        GameMode::VsAi {
            ai_faction: Faction::Red,
        }
    }
}

impl GameMode {
    /// The AI player's faction, `None` in hot-seat games
    pub fn ai_faction(self) -> Option<Faction> {
        match self {
            GameMode::VsHuman => None,
            GameMode::VsAi { ai_faction } => Some(ai_faction),
        }
    }

    /// Check if the AI is to move
    pub fn is_ai_turn(self, turn: Faction) -> bool {
        self.ai_faction() == Some(turn)
    }

    /// Check if a human may act for `turn`
    pub fn is_human_turn(self, turn: Faction) -> bool {
        !self.is_ai_turn(turn)
    }

    pub fn is_vs_ai(self) -> bool {
        matches!(self, GameMode::VsAi { .. })
    }
}

/// Menu label and short description for a difficulty level
pub fn difficulty_description(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy - plays loosely, often misses captures",
        Difficulty::Medium => "Medium - takes what is offered",
        Difficulty::Hard => "Hard - almost always the best-scoring move",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_mode_default() {
        //! Human plays Blue by default
        let mode = GameMode::default();
        assert_eq!(mode.ai_faction(), Some(Faction::Red));
        assert!(mode.is_human_turn(Faction::Blue));
        assert!(mode.is_ai_turn(Faction::Red));
    }

    #[test]
    fn test_hot_seat_never_ai_turn() {
        let mode = GameMode::VsHuman;
        for faction in Faction::ALL {
            assert!(!mode.is_ai_turn(faction));
            assert!(mode.is_human_turn(faction));
        }
        assert!(!mode.is_vs_ai());
    }

    #[test]
    fn test_game_mode_json_shape() {
        let json = serde_json::to_string(&GameMode::VsAi {
            ai_faction: Faction::Blue,
        })
        .expect("mode serializes");
        assert_eq!(json, r#"{"kind":"vs_ai","ai_faction":"blue"}"#);

        let mode: GameMode =
            serde_json::from_str(r#"{"kind":"vs_human"}"#).expect("mode parses");
        assert_eq!(mode, GameMode::VsHuman);
    }

    #[test]
    fn test_every_difficulty_described() {
        for difficulty in Difficulty::ALL {
            assert!(!difficulty_description(difficulty).is_empty());
        }
    }
}
