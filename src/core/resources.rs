//! User preferences
//!
//! [`GameSettings`] is read once at startup (file, then command-line
//! overrides) and handed by reference to the reducer and the AI runner.

use crate::game::ai::GameMode;
use jungle_engine::Difficulty;
use serde::{Deserialize, Serialize};

/// Default pause before the AI commits its move, in milliseconds
pub const DEFAULT_THINK_DELAY_MS: u64 = 500;

/// Game settings persisted between sessions
///
/// Unknown or missing fields in `settings.json` fall back to their defaults,
/// so older files keep loading after new settings are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Hot-seat or against the computer
    pub mode: GameMode,

    /// AI strength (jitter amplitude)
    pub difficulty: Difficulty,

    /// Cosmetic pause before an AI move is applied
    pub think_delay_ms: u64,

    /// Declare a draw once this many plies have been played without a
    /// winner. `None` plays on forever.
    pub draw_after_plies: Option<u32>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::Medium,
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            draw_after_plies: None,
        }
    }
}

impl GameSettings {
    /// Check whether the ply limit has been reached
    pub fn draw_reached(&self, plies: usize) -> bool {
        self.draw_after_plies
            .is_some_and(|limit| plies >= limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jungle_engine::Faction;

    #[test]
    fn test_game_settings_default() {
        let settings = GameSettings::default();
        assert_eq!(
            settings.mode,
            GameMode::VsAi {
                ai_faction: Faction::Red
            }
        );
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.think_delay_ms, 500);
        assert_eq!(settings.draw_after_plies, None);
    }

    #[test]
    fn test_draw_limit() {
        let mut settings = GameSettings::default();
        assert!(!settings.draw_reached(10_000));

        settings.draw_after_plies = Some(4);
        assert!(!settings.draw_reached(3));
        assert!(settings.draw_reached(4));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{ "difficulty": "hard" }"#).expect("partial settings parse");
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.think_delay_ms, DEFAULT_THINK_DELAY_MS);
        assert_eq!(settings.mode, GameMode::default());
    }
}
