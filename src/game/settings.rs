use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SettingsError;
use crate::eval::ProfileSet;
use crate::player::PlayerKind;
use crate::rules::RuleSet;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 40;

/// Game setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub cols: usize,
    pub rows: usize,
    /// Pair capture rule
    pub pair_check: bool,
    pub pairs_to_win: u32,
    /// Plays Color1 and moves first
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    pub profiles: ProfileSet,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 10,
            pair_check: false,
            pairs_to_win: 5,
            player1: PlayerKind::Human,
            player2: PlayerKind::Reference,
            profiles: ProfileSet::default(),
        }
    }
}

impl GameSettings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: GameSettings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (key, value) in [("cols", self.cols), ("rows", self.rows)] {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&value) {
                return Err(SettingsError::Validation(format!(
                    "{key} must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {value}"
                )));
            }
        }
        if self.pairs_to_win == 0 {
            return Err(SettingsError::Validation(
                "pairs_to_win must be >= 1".into(),
            ));
        }
        self.profiles.validate().map_err(SettingsError::Validation)?;
        Ok(())
    }

    /// Rule parameters handed to the players
    pub fn rules(&self) -> RuleSet {
        RuleSet {
            pair_check: self.pair_check,
            pairs_to_win: self.pairs_to_win,
        }
    }

    /// Default settings rendered as TOML
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        settings.validate().expect("default settings should be valid");
        assert_eq!(settings.rules(), RuleSet::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
pair_check = true
player1 = "defensive"

[profiles.aggressive]
own_weight = 3
"#;
        let settings: GameSettings = toml::from_str(toml_str).unwrap();
        assert!(settings.pair_check);
        assert_eq!(settings.player1, PlayerKind::Defensive);
        assert_eq!(settings.player2, PlayerKind::Reference);
        assert_eq!(settings.cols, 10);
        assert_eq!(settings.profiles.aggressive.own_weight, 3);
        assert_eq!(settings.profiles.aggressive.enemy_weight, 2);
        assert_eq!(settings.profiles.reference, ProfileSet::default().reference);
    }

    #[test]
    fn test_validation_rejects_tiny_grid() {
        let settings = GameSettings {
            rows: 4,
            ..GameSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("rows must be between 5 and 40"), "{err}");
    }

    #[test]
    fn test_validation_rejects_zero_pairs() {
        let settings = GameSettings {
            pairs_to_win: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_checks_profiles() {
        let mut settings = GameSettings::default();
        settings.profiles.reference.score_table = [0, 4, 1, 16, 64, 512];
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("profiles.reference"), "{err}");
    }

    #[test]
    fn test_unknown_player_is_parse_error() {
        let result: Result<GameSettings, _> = toml::from_str("player2 = \"network\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let settings = GameSettings::load_or_default(Path::new("nonexistent_gomoku.toml")).unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
cols = 15
rows = 12
pairs_to_win = 3
"#
        )
        .unwrap();

        let settings = GameSettings::load(&path).unwrap();
        assert_eq!((settings.cols, settings.rows), (15, 12));
        assert_eq!(settings.rules().pairs_to_win, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, "cols = 100\n").unwrap();
        assert!(matches!(
            GameSettings::load(&path),
            Err(SettingsError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_oversized_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(
            &path,
            "[profiles.aggressive]\nscore_table = [0, 1, 4, 16, 64, 1000000000]\n",
        )
        .unwrap();
        match GameSettings::load(&path) {
            Err(SettingsError::Validation(msg)) => assert!(msg.contains("profiles.aggressive"), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameSettings::default_toml().unwrap();
        let settings: GameSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, GameSettings::default());
    }
}
