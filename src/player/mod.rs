//! Players: the contract between the turn coordinator and whoever picks moves
//!
//! A player is bound once per game with [`Player::init`] to a shared read-only
//! grid, its color and the rule set. From then on the coordinator calls
//! [`Player::start_turn`] once per turn and the player answers exactly once
//! through its [`MoveObserver`]. The answer may be given right away or after
//! any number of [`Player::step`] calls.

pub mod human;
pub mod random;
pub mod reference;
pub mod registry;

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tracing::warn;

use crate::board::{Cell, Grid, Pos};
use crate::error::GridError;
use crate::rules::RuleSet;

pub use human::HumanPlayer;
pub use random::RandomAi;
pub use reference::ReferenceAi;
pub use registry::PlayerKind;

/// Grid handed to the players. The coordinator refreshes it after every
/// move; players only ever borrow it immutably.
pub type SharedGrid = Rc<RefCell<Grid>>;

/// Receives the move a player decided on
pub trait MoveObserver {
    fn move_chosen(&self, pos: Pos);
}

/// Whether a player still has work to do for the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Working,
    Idle,
}

pub trait Player {
    /// Display name, also the scoreboard key
    fn name(&self) -> &str;

    fn set_observer(&mut self, observer: Rc<dyn MoveObserver>);

    /// Bind the player to a game. Must be called before the first turn.
    fn init(&mut self, grid: SharedGrid, color: Cell, rules: RuleSet) -> Result<(), GridError>;

    /// It is this player's turn to move
    fn start_turn(&mut self);

    /// Do a slice of deferred work. Called repeatedly by the host while the
    /// player is on turn.
    fn step(&mut self) -> Step {
        Step::Idle
    }

    /// A cell was picked with the mouse or keyboard
    fn handle_selected_cell(&mut self, _pos: Pos) {}

    /// The game ended; `winner` is `Cell::Neutral` on a tie
    fn game_over(&mut self, _winner: Cell) {}

    /// Whether the player moves through cell selections
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Per-game binding shared by all player implementations
#[derive(Default)]
pub(crate) struct Seat {
    grid: Option<SharedGrid>,
    color: Cell,
    observer: Option<Rc<dyn MoveObserver>>,
}

impl Seat {
    pub(crate) fn bind(&mut self, grid: SharedGrid, color: Cell) {
        self.grid = Some(grid);
        self.color = color;
    }

    pub(crate) fn set_observer(&mut self, observer: Rc<dyn MoveObserver>) {
        self.observer = Some(observer);
    }

    /// Borrow the game grid, `None` before `init`
    pub(crate) fn grid(&self) -> Option<Ref<'_, Grid>> {
        self.grid.as_ref().map(|g| g.borrow())
    }

    #[inline]
    pub(crate) fn color(&self) -> Cell {
        self.color
    }

    /// Report the chosen move
    pub(crate) fn emit(&self, pos: Pos) {
        match &self.observer {
            Some(observer) => observer.move_chosen(pos),
            None => warn!(%pos, "move chosen without an observer, dropped"),
        }
    }
}
