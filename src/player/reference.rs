//! Reference AI: exhaustive one-ply search with segment evaluation
//!
//! Each turn the AI rates every free cell by trying its own stone there on a
//! private working copy and analyzing the whole board. The scan runs one row
//! per [`Player::step`] so the host stays responsive. The aggressive and
//! defensive AIs are the same search with a different [`BiasProfile`].

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::board::Cell;
use crate::error::GridError;
use crate::eval::{BiasProfile, Evaluator};
use crate::rules::RuleSet;
use crate::search::{select_best_move, RatingGrid, RowScan, ScanProgress};

use super::{MoveObserver, Player, Seat, SharedGrid, Step};

/// Search state, allocated by `init` once the grid size is known
struct Search {
    scan: RowScan,
    evaluator: Evaluator,
}

pub struct ReferenceAi {
    seat: Seat,
    name: String,
    profile: BiasProfile,
    search: Option<Search>,
    rng: StdRng,
}

impl ReferenceAi {
    pub fn new() -> Self {
        Self::with_profile("Reference AI", BiasProfile::REFERENCE)
    }

    pub fn aggressive() -> Self {
        Self::with_profile("Aggressive AI", BiasProfile::AGGRESSIVE)
    }

    pub fn defensive() -> Self {
        Self::with_profile("Defensive AI", BiasProfile::DEFENSIVE)
    }

    pub fn with_profile(name: impl Into<String>, profile: BiasProfile) -> Self {
        Self {
            seat: Seat::default(),
            name: name.into(),
            profile,
            search: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the tie-break random source
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[inline]
    pub fn profile(&self) -> &BiasProfile {
        &self.profile
    }

    /// Ratings of the last finished (or running) scan
    pub fn ratings(&self) -> Option<&RatingGrid> {
        self.search.as_ref().map(|s| s.scan.ratings())
    }

    pub fn is_thinking(&self) -> bool {
        self.search.as_ref().is_some_and(|s| s.scan.is_scanning())
    }
}

impl Default for ReferenceAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ReferenceAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_observer(&mut self, observer: Rc<dyn MoveObserver>) {
        self.seat.set_observer(observer);
    }

    fn init(&mut self, grid: SharedGrid, color: Cell, rules: RuleSet) -> Result<(), GridError> {
        let (cols, rows) = {
            let grid = grid.borrow();
            (grid.cols(), grid.rows())
        };
        let scan = match self.search.take() {
            Some(Search { mut scan, .. }) => {
                scan.resize(cols, rows)?;
                scan
            }
            None => RowScan::new(cols, rows)?,
        };
        self.search = Some(Search {
            scan,
            evaluator: Evaluator::new(color, rules.pair_check, self.profile),
        });
        self.seat.bind(grid, color);
        Ok(())
    }

    fn start_turn(&mut self) {
        let (Some(search), Some(grid)) = (self.search.as_mut(), self.seat.grid()) else {
            warn!(name = %self.name, "turn started before init");
            return;
        };
        if search.scan.begin(&grid) {
            debug!(name = %self.name, color = ?self.seat.color(), "scan started");
        }
    }

    fn step(&mut self) -> Step {
        let best = {
            let (Some(search), Some(grid)) = (self.search.as_mut(), self.seat.grid()) else {
                return Step::Idle;
            };
            let progress = search.scan.step(&grid, &search.evaluator);
            match progress {
                ScanProgress::Row(_) => return Step::Working,
                ScanProgress::Idle => return Step::Idle,
                ScanProgress::Complete => select_best_move(search.scan.ratings(), &mut self.rng),
            }
        };

        // The grid borrow has ended, the observer may update it
        match best {
            Some((pos, rating)) => {
                debug!(name = %self.name, %pos, rating, "scan complete");
                self.seat.emit(pos);
            }
            None => warn!(name = %self.name, "no free cell to play"),
        }
        Step::Idle
    }

    fn game_over(&mut self, _winner: Cell) {
        if let Some(search) = self.search.as_mut() {
            search.scan.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Grid, Pos};
    use crate::player::testing::{drive, seat, shared};

    fn seeded(ai: ReferenceAi) -> ReferenceAi {
        ai.with_rng(StdRng::seed_from_u64(42))
    }

    fn grid_with(cols: usize, rows: usize, stones: &[(usize, usize, Cell)]) -> SharedGrid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for &(col, row, color) in stones {
            grid.place_stone(Pos::new(col, row), color, false);
        }
        shared(grid)
    }

    #[test]
    fn test_one_row_per_step() {
        let grid = grid_with(10, 10, &[]);
        let mut ai = seeded(ReferenceAi::new());
        let recorder = seat(&mut ai, &grid, Cell::Color2, RuleSet::default());

        ai.start_turn();
        assert_eq!(recorder.count(), 0);
        let mut working_steps = 0;
        while ai.step() == Step::Working {
            working_steps += 1;
            assert_eq!(recorder.count(), 0);
        }
        assert_eq!(working_steps, 9);
        assert_eq!(recorder.count(), 1);
        assert!(!ai.is_thinking());
        assert_eq!(ai.step(), Step::Idle);
    }

    #[test]
    fn test_repeated_start_turn_does_not_restart() {
        let grid = grid_with(10, 10, &[]);
        let mut ai = seeded(ReferenceAi::new());
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        ai.start_turn();
        ai.step();
        ai.start_turn();
        let mut working_steps = 0;
        while ai.step() == Step::Working {
            working_steps += 1;
        }
        assert_eq!(working_steps, 8);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_empty_board_plays_center() {
        let centers = [Pos::new(4, 4), Pos::new(5, 4), Pos::new(4, 5), Pos::new(5, 5)];
        for seed in 0..10 {
            let grid = grid_with(10, 10, &[]);
            let mut ai = ReferenceAi::new().with_rng(StdRng::seed_from_u64(seed));
            let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());
            ai.start_turn();
            drive(&mut ai);

            let pos = recorder.last().unwrap();
            assert!(centers.contains(&pos), "picked {pos}");
            let ratings = ai.ratings().unwrap();
            let best = grid.borrow().positions().map(|p| ratings.get(p)).max().unwrap();
            assert!(centers.iter().all(|&c| ratings.get(c) == best));
        }
    }

    #[test]
    fn test_blocks_open_four() {
        let enemy = Cell::Color2;
        let run: Vec<(usize, usize, Cell)> = (0..4).map(|col| (col, 5, enemy)).collect();
        let grid = grid_with(10, 10, &run);
        let mut ai = seeded(ReferenceAi::new());
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        ai.start_turn();
        drive(&mut ai);
        let block = Pos::new(4, 5);
        assert_eq!(recorder.last(), Some(block));

        let ratings = ai.ratings().unwrap();
        let near_run = |p: Pos| p.row.abs_diff(5) <= 1 && p.col <= 4;
        for pos in grid.borrow().positions() {
            if grid.borrow().is_free(pos) && !near_run(pos) {
                assert!(
                    ratings.get(block) > ratings.get(pos),
                    "{pos} rated {} vs block {}",
                    ratings.get(pos),
                    ratings.get(block)
                );
            }
        }
    }

    #[test]
    fn test_five_rated_above_four() {
        let me = Cell::Color1;
        let mut stones: Vec<(usize, usize, Cell)> = (1..5).map(|col| (col, 1, me)).collect();
        stones.extend((1..4).map(|col| (col, 6, me)));
        let grid = grid_with(10, 10, &stones);
        let mut ai = seeded(ReferenceAi::new());
        let recorder = seat(&mut ai, &grid, me, RuleSet::default());

        ai.start_turn();
        drive(&mut ai);
        let ratings = ai.ratings().unwrap();
        assert!(ratings.get(Pos::new(5, 1)) > ratings.get(Pos::new(4, 6)));
        assert!(ratings.get(Pos::new(0, 1)) > ratings.get(Pos::new(4, 6)));

        let pos = recorder.last().unwrap();
        assert!(pos == Pos::new(0, 1) || pos == Pos::new(5, 1), "picked {pos}");
    }

    #[test]
    fn test_game_over_cancels_scan() {
        let grid = grid_with(10, 10, &[]);
        let mut ai = seeded(ReferenceAi::aggressive());
        let recorder = seat(&mut ai, &grid, Cell::Color1, RuleSet::default());

        ai.start_turn();
        ai.step();
        ai.game_over(Cell::Color2);
        assert!(!ai.is_thinking());
        assert_eq!(ai.step(), Step::Idle);
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_reinit_follows_grid_size() {
        let mut ai = seeded(ReferenceAi::defensive());
        seat(&mut ai, &grid_with(10, 10, &[]), Cell::Color1, RuleSet::default());
        let small = grid_with(6, 5, &[]);
        let recorder = seat(&mut ai, &small, Cell::Color2, RuleSet::default());

        ai.start_turn();
        drive(&mut ai);
        assert_eq!(ai.ratings().unwrap().cols(), 6);
        assert_eq!(ai.ratings().unwrap().rows(), 5);
        assert!(recorder.last().is_some());
    }

    #[test]
    fn test_variant_names_and_profiles() {
        assert_eq!(ReferenceAi::new().name(), "Reference AI");
        assert_eq!(ReferenceAi::aggressive().profile(), &BiasProfile::AGGRESSIVE);
        assert_eq!(ReferenceAi::defensive().name(), "Defensive AI");
        assert!(!ReferenceAi::new().is_interactive());
    }

    /// Applies every chosen move to the shared grid right away
    struct PlaceOnGrid {
        grid: SharedGrid,
        color: Cell,
    }

    impl MoveObserver for PlaceOnGrid {
        fn move_chosen(&self, pos: Pos) {
            self.grid.borrow_mut().place_stone(pos, self.color, false);
        }
    }

    #[test]
    fn test_observer_may_update_grid() {
        let grid = grid_with(6, 6, &[]);
        let mut ai = seeded(ReferenceAi::new());
        ai.set_observer(Rc::new(PlaceOnGrid {
            grid: grid.clone(),
            color: Cell::Color1,
        }));
        ai.init(grid.clone(), Cell::Color1, RuleSet::default()).unwrap();

        ai.start_turn();
        drive(&mut ai);
        assert_eq!(grid.borrow().stone_count(), 1);
        assert_eq!(grid.borrow().remaining_free_cells(), 35);
    }
}
