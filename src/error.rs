//! Error types shared across the crate

use std::collections::TryReserveError;
use std::path::PathBuf;

/// Errors raised while (re)allocating a grid or a rating grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidSize { cols: usize, rows: usize },

    #[error("failed to allocate storage for {cells} cells: {source}")]
    Allocation {
        cells: usize,
        source: TryReserveError,
    },
}

/// Errors that can occur when loading game settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("settings validation error: {0}")]
    Validation(String),
}

/// Errors that abort the setup of a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("{0} needs a user interface and cannot play a headless match")]
    HumanInHeadlessMatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::InvalidSize { cols: 0, rows: 7 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x7");
    }

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::Validation("cols must be between 5 and 40".to_string());
        assert_eq!(
            err.to_string(),
            "settings validation error: cols must be between 5 and 40"
        );
    }

    #[test]
    fn test_game_error_wraps_grid_error() {
        let err: GameError = GridError::InvalidSize { cols: 3, rows: 0 }.into();
        assert_eq!(
            err.to_string(),
            "grid error: grid dimensions must be positive, got 3x0"
        );
    }

    #[test]
    fn test_headless_error_display() {
        let err = GameError::HumanInHeadlessMatch("Human".to_string());
        assert_eq!(
            err.to_string(),
            "Human needs a user interface and cannot play a headless match"
        );
    }
}
