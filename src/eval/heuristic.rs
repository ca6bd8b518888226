//! Whole-board rating used by the one-ply search
//!
//! Every line of the grid (horizontal, vertical and both diagonals) is swept
//! with a 5-cell window. Each window position is rated by the number of
//! stones of a single color it holds: a window containing both colors can
//! never become five in a row and is worth nothing. The sum over all windows
//! of all lines is the board rating from the AI's point of view.
//!
//! With pair capture enabled, own pairs that the enemy could capture on its
//! next move (`X O O _` or `_ O O X`) are penalized on top.

use crate::board::{Cell, Grid};

use super::patterns::BiasProfile;
use super::segment::{Segment, SEGMENT_LEN};

/// Rates boards from the perspective of one player
#[derive(Debug, Clone)]
pub struct Evaluator {
    me: Cell,
    enemy: Cell,
    pair_check: bool,
    profile: BiasProfile,
}

impl Evaluator {
    pub fn new(me: Cell, pair_check: bool, profile: BiasProfile) -> Self {
        Self {
            me,
            enemy: me.opponent(),
            pair_check,
            profile,
        }
    }

    #[inline]
    pub fn color(&self) -> Cell {
        self.me
    }

    #[inline]
    pub fn pair_check(&self) -> bool {
        self.pair_check
    }

    /// Rate the whole board. Higher is better for the evaluating player.
    ///
    /// Summed in 64 bits and saturated to the `i32` range.
    #[must_use]
    pub fn analyze_board(&self, grid: &Grid) -> i32 {
        let cols = grid.cols() as i32;
        let rows = grid.rows() as i32;
        // Diagonals shorter than a segment can never hold five in a row
        let reach = SEGMENT_LEN as i32 - 1;
        let mut total: i64 = 0;

        // Horizontal: one line per row, left to right
        for y in 0..rows {
            total += self.rate_line(grid, 0, y, 1, 0);
        }

        // Vertical: one line per column, top to bottom
        for x in 0..cols {
            total += self.rate_line(grid, x, 0, 0, 1);
        }

        // Diagonal ↘: starting on the left border, then on the top border
        for y in 0..rows - reach {
            total += self.rate_line(grid, 0, y, 1, 1);
        }
        for x in 1..cols - reach {
            total += self.rate_line(grid, x, 0, 1, 1);
        }

        // Diagonal ↗: starting on the left border, then on the bottom border
        for y in reach..rows {
            total += self.rate_line(grid, 0, y, 1, -1);
        }
        for x in 1..cols - reach {
            total += self.rate_line(grid, x, rows - 1, 1, -1);
        }

        total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Sweep one line starting at (x, y) in direction (dx, dy)
    fn rate_line(&self, grid: &Grid, mut x: i32, mut y: i32, dx: i32, dy: i32) -> i64 {
        let mut seg = Segment::new();
        let mut rating: i64 = 0;
        // Own stones directly preceding the current cell
        let mut own_run = 0;

        while let Some(cell) = grid.cell_at(x, y) {
            seg.push(cell);
            rating += self.rate_segment(&seg);

            if self.pair_check {
                if cell == self.me {
                    own_run += 1;
                } else {
                    // Exactly two own stones just ended: capturable if the cells
                    // framing the pair differ (one side enemy, one side empty)
                    if own_run == 2 && seg.fed() > 3 && seg.back(3) != cell {
                        rating -= i64::from(self.profile.pair_threat_penalty);
                    }
                    own_run = 0;
                }
            }

            x += dx;
            y += dy;
        }

        rating
    }

    #[inline]
    fn rate_segment(&self, seg: &Segment) -> i64 {
        let own = seg.count_hits(self.me);
        let enemy = seg.count_hits(self.enemy);
        self.profile.rate_segment(own, enemy)
    }
}
