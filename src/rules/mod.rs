//! Game rules for Gomoku
//!
//! This module implements the rule set used by the grid:
//! - Pair capture (optional rule variant)
//! - Win condition (5-in-a-row around the last move)
//!
//! Winning by captured pairs is counted by the game coordinator.

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_positions, count_captures, sandwiches_pair, DIRECTIONS};
pub use win::{has_five_through, winning_line};

/// Rule parameters handed to every player at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Pair capture enabled for this game
    pub pair_check: bool,
    /// Captured pairs required to win (only relevant with pair check)
    pub pairs_to_win: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            pair_check: false,
            pairs_to_win: 5,
        }
    }
}
