//! Computer-vs-computer matches without a user interface

use tracing::{info, warn};

use crate::board::{Cell, Grid};
use crate::error::GameError;

use super::coordinator::{Game, GamePhase, TickOutcome};
use super::score::ScoreBoard;
use super::settings::GameSettings;

/// Outcome of a series of headless games
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Final phase of every game, in order
    pub results: Vec<GamePhase>,
    /// Board at the end of the last game
    pub final_grid: Grid,
    pub scores: ScoreBoard,
}

impl MatchReport {
    /// Games won by the player seated with `color`
    pub fn wins(&self, color: Cell) -> usize {
        self.results
            .iter()
            .filter(|phase| matches!(phase, GamePhase::GameOver(r) if r.winner == color))
            .count()
    }

    pub fn ties(&self) -> usize {
        self.results.iter().filter(|p| **p == GamePhase::Tie).count()
    }
}

/// Play `games` games between the players named in `settings`.
///
/// Interactive players are rejected since nobody could answer them.
pub fn play_match(settings: GameSettings, games: u32) -> Result<MatchReport, GameError> {
    for kind in [settings.player1, settings.player2] {
        if kind.is_interactive() {
            return Err(GameError::HumanInHeadlessMatch(kind.display_name().to_string()));
        }
    }

    let mut game = Game::new(settings)?;
    let mut results = Vec::new();
    for round in 0..games {
        if round > 0 {
            game.restart()?;
        }
        if game.run_until_stopped() != TickOutcome::Stopped {
            warn!(round = round + 1, "game stalled waiting for a move");
        }
        info!(round = round + 1, moves = game.history().len(), phase = ?game.phase(), "match game finished");
        results.push(game.phase());
    }

    Ok(MatchReport {
        results,
        final_grid: game.grid().clone(),
        scores: game.scores().clone(),
    })
}
