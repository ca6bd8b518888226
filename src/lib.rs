//! Gomoku with pluggable players
//!
//! A five-in-a-row game on a variable size grid with an optional pair
//! capture rule, played by humans or computer players:
//! - 5-in-a-row to win (overlines allowed)
//! - Pair capture: X-O-O-X removes the O-O pair
//! - Capture win after a configurable number of captured pairs
//!
//! # Architecture
//!
//! - [`board`]: Grid storage, stone placement and win detection
//! - [`rules`]: Pair capture and five-in-a-row detection
//! - [`eval`]: Segment based board evaluation and bias profiles
//! - [`search`]: Resumable one-ply search and move selection
//! - [`player`]: The `Player` contract and its implementations
//! - [`game`]: Turn coordinator, settings and scores
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::game::{Game, GamePhase, GameSettings, TickOutcome};
//! use gomoku::player::PlayerKind;
//!
//! let settings = GameSettings {
//!     player1: PlayerKind::Reference,
//!     player2: PlayerKind::Random,
//!     ..GameSettings::default()
//! };
//! let mut game = Game::new(settings).unwrap();
//!
//! // Each tick does one slice of work; run until the game ends
//! assert_eq!(game.run_until_stopped(), TickOutcome::Stopped);
//! assert!(!matches!(game.phase(), GamePhase::InGame));
//! ```

pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Cell, Grid, Pos};
pub use error::{GameError, GridError, SettingsError};
pub use game::{Game, GameSettings};
pub use player::{Player, PlayerKind};
