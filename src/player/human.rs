//! Human player driven by cell selections from the host

use std::rc::Rc;

use tracing::{debug, warn};

use crate::board::{Cell, Pos};
use crate::error::GridError;
use crate::rules::RuleSet;

use super::{MoveObserver, Player, Seat, SharedGrid};

#[derive(Default)]
pub struct HumanPlayer {
    seat: Seat,
    /// Waiting for a selection
    active: bool,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        "Human"
    }

    fn set_observer(&mut self, observer: Rc<dyn MoveObserver>) {
        self.seat.set_observer(observer);
    }

    fn init(&mut self, grid: SharedGrid, color: Cell, _rules: RuleSet) -> Result<(), GridError> {
        self.seat.bind(grid, color);
        self.active = false;
        Ok(())
    }

    fn start_turn(&mut self) {
        debug!(color = ?self.seat.color(), "waiting for human selection");
        self.active = true;
    }

    fn handle_selected_cell(&mut self, pos: Pos) {
        if !self.active {
            warn!(%pos, "cell selected while not on turn, ignored");
            return;
        }

        let free = self
            .seat
            .grid()
            .is_some_and(|grid| grid.contains(pos) && grid.is_free(pos));
        if !free {
            warn!(%pos, "selected cell is not free, ignored");
            return;
        }

        self.active = false;
        self.seat.emit(pos);
    }

    fn game_over(&mut self, _winner: Cell) {
        self.active = false;
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;
    use crate::player::testing::{seat, shared};

    #[test]
    fn test_selection_before_turn_is_ignored() {
        let grid = shared(Grid::new(10, 10).unwrap());
        let mut human = HumanPlayer::new();
        let recorder = seat(&mut human, &grid, Cell::Color1, RuleSet::default());

        human.handle_selected_cell(Pos::new(2, 2));
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_emits_once_per_turn() {
        let grid = shared(Grid::new(10, 10).unwrap());
        let mut human = HumanPlayer::new();
        let recorder = seat(&mut human, &grid, Cell::Color1, RuleSet::default());

        human.start_turn();
        assert!(human.is_active());
        human.handle_selected_cell(Pos::new(2, 2));
        human.handle_selected_cell(Pos::new(3, 3));
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.last(), Some(Pos::new(2, 2)));
        assert!(!human.is_active());
    }

    #[test]
    fn test_occupied_cell_keeps_waiting() {
        let grid = shared(Grid::new(10, 10).unwrap());
        grid.borrow_mut().place_stone(Pos::new(4, 4), Cell::Color2, false);
        let mut human = HumanPlayer::new();
        let recorder = seat(&mut human, &grid, Cell::Color1, RuleSet::default());

        human.start_turn();
        human.handle_selected_cell(Pos::new(4, 4));
        human.handle_selected_cell(Pos::new(40, 4));
        assert_eq!(recorder.count(), 0);
        assert!(human.is_active());

        human.handle_selected_cell(Pos::new(5, 4));
        assert_eq!(recorder.last(), Some(Pos::new(5, 4)));
    }

    #[test]
    fn test_game_over_deactivates() {
        let grid = shared(Grid::new(10, 10).unwrap());
        let mut human = HumanPlayer::new();
        let recorder = seat(&mut human, &grid, Cell::Color2, RuleSet::default());

        human.start_turn();
        human.game_over(Cell::Color1);
        human.handle_selected_cell(Pos::new(0, 0));
        assert_eq!(recorder.count(), 0);
        assert!(human.is_interactive());
    }
}
