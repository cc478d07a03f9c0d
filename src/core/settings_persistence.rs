//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences
//! survive between sessions.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/jungle/settings.json` on Linux. Falls back to the working
//! directory if no config directory can be determined.
//!
//! # Error Handling
//!
//! - [`load_settings`] falls back to default settings on any failure
//! - [`save_settings`] logs failures without interrupting play
//!
//! The `_from`/`_to` variants take an explicit path and return
//! [`CoreResult`], for callers and tests that want the error.

use crate::core::{CoreError, CoreResult, GameSettings};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file inside the user's configuration directory
pub fn config_settings_path() -> CoreResult<PathBuf> {
    ProjectDirs::from("com", "jungle", "Jungle")
        .map(|proj_dirs| proj_dirs.config_dir().join(SETTINGS_FILENAME))
        .ok_or_else(|| CoreError::ConfigDir {
            message: "no home directory for the current user".to_string(),
        })
}

/// Settings path, falling back to the working directory
pub fn get_settings_path() -> PathBuf {
    config_settings_path().unwrap_or_else(|e| {
        warn!("[SETTINGS] {}. Using ./{}", e, SETTINGS_FILENAME);
        PathBuf::from(SETTINGS_FILENAME)
    })
}

/// Read settings from an explicit path
pub fn load_settings_from(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Write settings to an explicit path, creating parent directories
pub fn save_settings_to(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings on startup
///
/// A missing file is normal on first launch. A file that cannot be read or
/// parsed is reported and replaced by defaults.
pub fn load_settings() -> GameSettings {
    let settings_path = get_settings_path();

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return GameSettings::default();
    }

    match load_settings_from(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            GameSettings::default()
        }
    }
}

/// Save settings to the user's configuration directory
pub fn save_settings(settings: &GameSettings) {
    let settings_path = get_settings_path();

    match save_settings_to(settings, &settings_path) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", settings_path),
        Err(e) => error!(
            "[SETTINGS] Failed to save settings to {:?}: {}",
            settings_path, e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GameMode;
    use jungle_engine::{Difficulty, Faction};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("jungle-settings-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let settings = GameSettings {
            mode: GameMode::VsAi {
                ai_faction: Faction::Blue,
            },
            difficulty: Difficulty::Easy,
            think_delay_ms: 0,
            draw_after_plies: Some(200),
        };

        save_settings_to(&settings, &path).expect("settings saved");
        let loaded = load_settings_from(&path).expect("settings loaded");
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_path("missing");
        assert!(matches!(
            load_settings_from(&path),
            Err(CoreError::SettingsIo(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().expect("scratch dir")).expect("dir created");
        fs::write(&path, "{ not json").expect("file written");

        assert!(matches!(
            load_settings_from(&path),
            Err(CoreError::SettingsSerialization(_))
        ));

        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }
}
