//! Turn coordinator
//!
//! Drives Init → StartTurn → move callback → mutate grid → win/tie check →
//! switch player on an explicit step queue. Every [`Game::tick`] does one
//! unit of work, so a player that answers from inside `start_turn` or
//! `step` never re-enters the coordinator: its move sits in the mailbox
//! until the next tick.

use std::cell::{Cell as StdCell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Cell, Grid, Pos};
use crate::error::GameError;
use crate::player::{MoveObserver, Player, SharedGrid, Step};
use crate::rules::{winning_line, RuleSet};

use super::score::ScoreBoard;
use super::settings::GameSettings;

/// Single-slot mailbox the active player reports its move to
#[derive(Debug, Default)]
pub struct MoveMailbox {
    slot: StdCell<Option<Pos>>,
}

impl MoveMailbox {
    pub fn take(&self) -> Option<Pos> {
        self.slot.take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl MoveObserver for MoveMailbox {
    /// # Panics
    /// Panics if a move arrives while the previous one was not consumed yet:
    /// a player answered twice in one turn.
    fn move_chosen(&self, pos: Pos) {
        if let Some(pending) = self.slot.get() {
            panic!("move {pos} chosen while move {pending} is still pending");
        }
        self.slot.set(Some(pos));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FiveInRow,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Cell,
    pub win_type: WinType,
    pub winning_line: Option<[Pos; 5]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InGame,
    GameOver(GameResult),
    Tie,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::InGame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    /// Next tick hands the turn to the current player
    StartTurn,
    /// Waiting for the current player's move
    AwaitMove,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Work was done, tick again soon
    Progressed,
    /// Nothing to do until the current player gets a cell selection
    AwaitingInput,
    /// Game over, tie or paused
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub color: Cell,
    /// Enemy pairs removed by this move
    pub captured: usize,
    /// Time from the start of the turn to the move
    pub elapsed: Duration,
}

pub struct Game {
    settings: GameSettings,
    grid: Grid,
    /// Copy handed to the players, refreshed after every move
    send_grid: SharedGrid,
    players: [Box<dyn Player>; 2],
    mailbox: Rc<MoveMailbox>,
    /// Index of the player on turn (0 plays Color1)
    current: usize,
    phase: GamePhase,
    turn: TurnState,
    turn_started: Instant,
    paused: bool,
    pairs_captured: [u32; 2],
    history: Vec<MoveRecord>,
    scores: ScoreBoard,
}

impl Game {
    /// Build the players named in `settings` and start a game
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        let player1 = settings.player1.create(&settings.profiles);
        let player2 = settings.player2.create(&settings.profiles);
        Self::with_players(settings, player1, player2)
    }

    pub fn with_players(
        settings: GameSettings,
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        let grid = Grid::new(settings.cols, settings.rows)?;
        let send_grid = Rc::new(RefCell::new(grid.clone()));

        let mut game = Self {
            settings,
            grid,
            send_grid,
            players: [player1, player2],
            mailbox: Rc::new(MoveMailbox::default()),
            current: 0,
            phase: GamePhase::InGame,
            turn: TurnState::StartTurn,
            turn_started: Instant::now(),
            paused: false,
            pairs_captured: [0; 2],
            history: Vec::new(),
            scores: ScoreBoard::new(),
        };
        for player in &mut game.players {
            player.set_observer(game.mailbox.clone());
        }
        game.init_players()?;
        Ok(game)
    }

    fn init_players(&mut self) -> Result<(), GameError> {
        let rules = self.settings.rules();
        for (player, color) in self.players.iter_mut().zip([Cell::Color1, Cell::Color2]) {
            player.init(self.send_grid.clone(), color, rules)?;
        }
        info!(
            player1 = self.players[0].name(),
            player2 = self.players[1].name(),
            cols = self.settings.cols,
            rows = self.settings.rows,
            pair_check = rules.pair_check,
            "game started"
        );
        Ok(())
    }

    /// Start over with the same settings and players. Scores are kept.
    pub fn restart(&mut self) -> Result<(), GameError> {
        info!("restarting game");
        self.grid.resize(self.settings.cols, self.settings.rows)?;
        self.send_grid
            .borrow_mut()
            .resize(self.settings.cols, self.settings.rows)?;
        self.mailbox.take();
        self.current = 0;
        self.phase = GamePhase::InGame;
        self.turn = TurnState::StartTurn;
        self.paused = false;
        self.pairs_captured = [0; 2];
        self.history.clear();
        self.init_players()
    }

    /// Do one unit of work
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_running() {
            if let Some(pos) = self.mailbox.take() {
                warn!(%pos, "move arrived after the game ended, dropped");
            }
            return TickOutcome::Stopped;
        }
        if self.paused {
            return TickOutcome::Stopped;
        }

        match self.turn {
            TurnState::StartTurn => {
                self.turn = TurnState::AwaitMove;
                self.turn_started = Instant::now();
                debug!(
                    player = self.players[self.current].name(),
                    color = ?self.current_color(),
                    "turn started"
                );
                self.players[self.current].start_turn();
                TickOutcome::Progressed
            }
            TurnState::AwaitMove => {
                if let Some(pos) = self.mailbox.take() {
                    self.apply_move(pos);
                    return TickOutcome::Progressed;
                }
                match self.players[self.current].step() {
                    Step::Working => TickOutcome::Progressed,
                    Step::Idle if self.mailbox.is_pending() => TickOutcome::Progressed,
                    Step::Idle => TickOutcome::AwaitingInput,
                }
            }
        }
    }

    /// Tick until the game stops or waits for input
    pub fn run_until_stopped(&mut self) -> TickOutcome {
        loop {
            match self.tick() {
                TickOutcome::Progressed => continue,
                outcome => return outcome,
            }
        }
    }

    fn apply_move(&mut self, pos: Pos) {
        let color = self.current_color();
        debug_assert!(self.grid.is_free(pos), "player chose occupied cell {pos}");

        let rules = self.rules();
        let captured = self.grid.place_stone(pos, color, rules.pair_check);
        if captured > 0 {
            debug!(%pos, captured, "pairs captured");
        }
        self.pairs_captured[self.current] += captured as u32;
        self.history.push(MoveRecord {
            pos,
            color,
            captured,
            elapsed: self.turn_started.elapsed(),
        });

        if let Some(line) = winning_line(&self.grid, color, pos) {
            self.finish(GamePhase::GameOver(GameResult {
                winner: color,
                win_type: WinType::FiveInRow,
                winning_line: Some(line),
            }));
        } else if rules.pair_check && self.pairs_captured[self.current] >= rules.pairs_to_win {
            self.finish(GamePhase::GameOver(GameResult {
                winner: color,
                win_type: WinType::Capture,
                winning_line: None,
            }));
        } else if self.grid.remaining_free_cells() == 0 {
            self.finish(GamePhase::Tie);
        }

        self.send_grid.borrow_mut().copy_from(&self.grid);

        if self.phase.is_running() {
            self.current = 1 - self.current;
            self.turn = TurnState::StartTurn;
        }
    }

    fn finish(&mut self, phase: GamePhase) {
        self.phase = phase;
        let winner = match phase {
            GamePhase::GameOver(result) => {
                info!(
                    winner = self.players[self.current].name(),
                    color = ?result.winner,
                    win_type = ?result.win_type,
                    moves = self.history.len(),
                    "game over"
                );
                let loser = self.players[1 - self.current].name().to_string();
                let winner_name = self.players[self.current].name().to_string();
                self.scores.record_game(&winner_name, &loser);
                result.winner
            }
            GamePhase::Tie => {
                info!(moves = self.history.len(), "game tied");
                Cell::Neutral
            }
            GamePhase::InGame => return,
        };
        for player in &mut self.players {
            player.game_over(winner);
        }
    }

    /// Forward a cell selection to the player on turn
    pub fn select_cell(&mut self, pos: Pos) {
        if !self.phase.is_running() || self.paused {
            warn!(%pos, "cell selected while the game is not running, ignored");
            return;
        }
        self.players[self.current].handle_selected_cell(pos);
    }

    pub fn pause(&mut self) {
        if !self.paused {
            info!("game paused");
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            info!("game resumed");
            self.paused = false;
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.settings.rules()
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Color of the player on turn
    pub fn current_color(&self) -> Cell {
        if self.current == 0 {
            Cell::Color1
        } else {
            Cell::Color2
        }
    }

    pub fn current_player(&self) -> &dyn Player {
        self.players[self.current].as_ref()
    }

    /// Player seated with `color`; `Color1` for neutral
    pub fn player(&self, color: Cell) -> &dyn Player {
        match color {
            Cell::Color2 => self.players[1].as_ref(),
            _ => self.players[0].as_ref(),
        }
    }

    /// Pairs captured so far by the player seated with `color`
    pub fn pairs_captured(&self, color: Cell) -> u32 {
        match color {
            Cell::Color1 => self.pairs_captured[0],
            Cell::Color2 => self.pairs_captured[1],
            Cell::Neutral => 0,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|m| m.pos)
    }

    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.phase {
            GamePhase::GameOver(result) => result.winning_line,
            _ => None,
        }
    }

    /// Elapsed time of the current turn
    pub fn turn_elapsed(&self) -> Duration {
        self.turn_started.elapsed()
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }
}
