//! Command-line flags
//!
//! Flags override the saved [`GameSettings`]; the merged result is saved
//! again unless `--no-save` is given.

use clap::{Parser, ValueEnum};
use jungle_engine::{Difficulty, Faction};

use crate::core::GameSettings;
use crate::game::ai::GameMode;

#[derive(Debug, Parser)]
#[command(name = "jungle", version, about = "Jungle (Dou Shou Qi) in the terminal")]
pub struct Args {
    /// Play against another human or the AI
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// AI strength
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Faction you play against the AI (Blue moves first)
    #[arg(long, value_enum)]
    pub play_as: Option<FactionArg>,

    /// Pause before the AI move is shown, in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Declare a draw after this many plies (0 disables)
    #[arg(long)]
    pub draw_after: Option<u32>,

    /// Do not write the settings file
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Pvp,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FactionArg {
    Blue,
    Red,
}

impl From<FactionArg> for Faction {
    fn from(arg: FactionArg) -> Self {
        match arg {
            FactionArg::Blue => Faction::Blue,
            FactionArg::Red => Faction::Red,
        }
    }
}

impl Args {
    /// Merge these flags into `settings`
    pub fn apply_to(&self, settings: &mut GameSettings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty.into();
        }
        if let Some(think_ms) = self.think_ms {
            settings.think_delay_ms = think_ms;
        }
        if let Some(plies) = self.draw_after {
            settings.draw_after_plies = (plies > 0).then_some(plies);
        }

        let human = self
            .play_as
            .map(Faction::from)
            .or_else(|| settings.mode.ai_faction().map(Faction::opponent))
            .unwrap_or(Faction::Blue);

        settings.mode = match (self.mode, settings.mode) {
            (Some(ModeArg::Pvp), _) => GameMode::VsHuman,
            (Some(ModeArg::Ai), _) | (None, GameMode::VsAi { .. }) => GameMode::VsAi {
                ai_faction: human.opponent(),
            },
            (None, GameMode::VsHuman) => GameMode::VsHuman,
        };
    }
}
