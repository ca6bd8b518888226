//! Five cell analysis window swept along a line

use crate::board::Cell;

/// Segment length
pub const SEGMENT_LEN: usize = 5;

/// Ring buffer holding the colors of the last five cells of a line sweep.
#[derive(Debug, Clone)]
pub struct Segment {
    cells: [Cell; SEGMENT_LEN],
    cur: usize,
    /// Cells fed since the last reset; windows are only rated once the
    /// buffer is full so that grid borders do not look like empty space.
    fed: usize,
}

impl Segment {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Neutral; SEGMENT_LEN],
            cur: 0,
            fed: 0,
        }
    }

    /// Start a new line
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed the next cell of the line
    #[inline]
    pub fn push(&mut self, cell: Cell) {
        self.cur = (self.cur + 1) % SEGMENT_LEN;
        self.cells[self.cur] = cell;
        self.fed += 1;
    }

    #[inline]
    pub fn fed(&self) -> usize {
        self.fed
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.fed >= SEGMENT_LEN
    }

    /// Color fed `n` cells before the most recent one (`n < 5`)
    #[inline]
    pub fn back(&self, n: usize) -> Cell {
        debug_assert!(n < SEGMENT_LEN);
        self.cells[(self.cur + SEGMENT_LEN - n) % SEGMENT_LEN]
    }

    /// Number of `color` stones in the window.
    ///
    /// Zero while the window is not full yet, and zero as soon as a stone
    /// of any other color shares the window.
    pub fn count_hits(&self, color: Cell) -> usize {
        if !self.is_full() {
            return 0;
        }
        let mut hits = 0;
        for &cell in &self.cells {
            if cell == color {
                hits += 1;
            } else if !cell.is_neutral() {
                return 0;
            }
        }
        hits
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}
