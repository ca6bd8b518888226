//! Resumable one-ply scan
//!
//! The scan evaluates every free cell by placing the AI's stone on a private
//! working copy of the board and rating the result. It advances one row per
//! [`RowScan::step`] so a host event loop can run between rows.

use tracing::debug;

use crate::board::{Grid, Pos};
use crate::error::GridError;
use crate::eval::Evaluator;

use super::rating::{RatingGrid, TAKEN_SPACE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning { row: usize },
}

/// Result of one scan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanProgress {
    /// No scan in progress, nothing was done
    Idle,
    /// Row finished, more rows remain
    Row(usize),
    /// Last row finished, ratings are final
    Complete,
}

#[derive(Debug, Clone)]
pub struct RowScan {
    working: Grid,
    ratings: RatingGrid,
    state: ScanState,
}

impl RowScan {
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        Ok(Self {
            working: Grid::new(cols, rows)?,
            ratings: RatingGrid::new(cols, rows)?,
            state: ScanState::Idle,
        })
    }

    /// Reallocate the working copy and ratings for a new board size
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        self.working.resize(cols, rows)?;
        self.ratings.resize(cols, rows)?;
        self.state = ScanState::Idle;
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Scanning { .. })
    }

    #[inline]
    pub fn ratings(&self) -> &RatingGrid {
        &self.ratings
    }

    /// Take a fresh working copy of `board` and start at row 0.
    ///
    /// Returns `false` without touching anything if a scan is already running.
    pub fn begin(&mut self, board: &Grid) -> bool {
        if self.is_scanning() {
            return false;
        }
        self.working.copy_from(board);
        self.state = ScanState::Scanning { row: 0 };
        true
    }

    /// Drop a running scan. Partial ratings are never reused.
    pub fn cancel(&mut self) {
        if self.is_scanning() {
            debug!("scan cancelled");
        }
        self.state = ScanState::Idle;
    }

    /// Rate every cell of the current row.
    ///
    /// `board` is the grid the scan was started from; it restores the working
    /// copy after a hypothetical move captured stones.
    pub fn step(&mut self, board: &Grid, evaluator: &Evaluator) -> ScanProgress {
        let ScanState::Scanning { row } = self.state else {
            return ScanProgress::Idle;
        };

        for col in 0..self.working.cols() {
            let pos = Pos::new(col, row);
            if !self.working.is_free(pos) {
                self.ratings.set(pos, TAKEN_SPACE);
                continue;
            }

            let captured = self
                .working
                .place_stone(pos, evaluator.color(), evaluator.pair_check());
            let rating = match evaluator.analyze_board(&self.working) {
                // The marker stays reserved for taken cells
                TAKEN_SPACE => TAKEN_SPACE + 1,
                rating => rating,
            };
            self.ratings.set(pos, rating);

            if captured > 0 {
                self.working.copy_from(board);
            } else {
                self.working.clear_cell(pos);
            }
        }

        if row + 1 < self.working.rows() {
            self.state = ScanState::Scanning { row: row + 1 };
            ScanProgress::Row(row)
        } else {
            self.state = ScanState::Idle;
            ScanProgress::Complete
        }
    }

    /// Scan the whole board synchronously
    pub fn run_to_completion(&mut self, board: &Grid, evaluator: &Evaluator) -> &RatingGrid {
        self.begin(board);
        while let ScanProgress::Row(_) = self.step(board, evaluator) {}
        &self.ratings
    }
}
