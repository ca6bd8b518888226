//! Game flow around the players
//!
//! Contains:
//! - The turn coordinator driving players on a cooperative tick
//! - Settings loaded from TOML
//! - The in-memory scoreboard
//! - Headless computer-vs-computer matches

pub mod coordinator;
pub mod headless;
pub mod score;
pub mod settings;

pub use coordinator::{
    Game, GamePhase, GameResult, MoveMailbox, MoveRecord, TickOutcome, WinType,
};
pub use headless::{play_match, MatchReport};
pub use score::{Score, ScoreBoard};
pub use settings::{GameSettings, MAX_GRID_SIZE, MIN_GRID_SIZE};
