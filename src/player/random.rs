//! Random AI: plays a uniformly chosen free cell

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::board::{Cell, Pos};
use crate::error::GridError;
use crate::rules::RuleSet;

use super::{MoveObserver, Player, Seat, SharedGrid};

/// Plays a uniformly random free cell.
pub struct RandomAi {
    seat: Seat,
    rng: StdRng,
}

impl RandomAi {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            seat: Seat::default(),
            rng,
        }
    }

    /// Rejection sampling over the whole grid, `None` if no cell is free
    fn pick(&mut self) -> Option<Pos> {
        let grid = self.seat.grid()?;
        if grid.remaining_free_cells() == 0 {
            return None;
        }
        loop {
            let pos = Pos::new(
                self.rng.random_range(0..grid.cols()),
                self.rng.random_range(0..grid.rows()),
            );
            if grid.is_free(pos) {
                return Some(pos);
            }
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomAi {
    fn name(&self) -> &str {
        "Random AI"
    }

    fn set_observer(&mut self, observer: Rc<dyn MoveObserver>) {
        self.seat.set_observer(observer);
    }

    fn init(&mut self, grid: SharedGrid, color: Cell, _rules: RuleSet) -> Result<(), GridError> {
        self.seat.bind(grid, color);
        Ok(())
    }

    fn start_turn(&mut self) {
        match self.pick() {
            Some(pos) => {
                debug!(%pos, "random move");
                self.seat.emit(pos);
            }
            None => warn!("no free cell to play"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;
    use crate::player::testing::{seat, shared};

    #[test]
    fn test_plays_free_cells_only() {
        let grid = shared(Grid::new(5, 5).unwrap());
        let mut ai = RandomAi::with_rng(StdRng::seed_from_u64(7));
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        for turn in 0..25 {
            ai.start_turn();
            assert_eq!(recorder.count(), turn + 1);
            let pos = recorder.last().unwrap();
            assert!(grid.borrow().is_free(pos));
            grid.borrow_mut().place_stone(pos, Cell::Color1, false);
        }
        assert_eq!(grid.borrow().remaining_free_cells(), 0);
    }

    #[test]
    fn test_finds_last_free_cell() {
        let grid = shared(Grid::new(6, 6).unwrap());
        let all: Vec<Pos> = grid.borrow().positions().collect();
        for pos in all {
            if pos != Pos::new(5, 3) {
                grid.borrow_mut().place_stone(pos, Cell::Color2, false);
            }
        }
        let mut ai = RandomAi::with_rng(StdRng::seed_from_u64(11));
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        ai.start_turn();
        assert_eq!(recorder.last(), Some(Pos::new(5, 3)));
    }

    #[test]
    fn test_full_grid_emits_nothing() {
        let grid = shared(Grid::new(5, 5).unwrap());
        let all: Vec<Pos> = grid.borrow().positions().collect();
        for pos in all {
            grid.borrow_mut().place_stone(pos, Cell::Color2, false);
        }
        let mut ai = RandomAi::with_rng(StdRng::seed_from_u64(3));
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        ai.start_turn();
        assert_eq!(recorder.count(), 0);
    }
}
