//! Grid storage with pair-capture placement and win detection

use std::fmt;

use crate::error::GridError;
use crate::rules::{captured_positions, has_five_through};

use super::{Cell, Pos};

/// Authoritative cell storage for one game.
///
/// Cells live in a single flat buffer addressed by `row * cols + col`.
/// The free-cell counter always equals the number of neutral cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    remaining_free: usize,
    /// Most recent placement, only used for highlighting
    last_move: Option<Pos>,
}

impl Grid {
    /// Create a grid of neutral cells
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        let mut grid = Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            remaining_free: 0,
            last_move: None,
        };
        grid.resize(cols, rows)?;
        Ok(grid)
    }

    /// Discard the current contents and allocate a fresh `cols x rows` grid.
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidSize { cols, rows });
        }
        let total = cols
            .checked_mul(rows)
            .ok_or(GridError::InvalidSize { cols, rows })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|source| GridError::Allocation { cells: total, source })?;
        cells.resize(total, Cell::Neutral);

        self.cols = cols;
        self.rows = rows;
        self.cells = cells;
        self.remaining_free = total;
        self.last_move = None;
        Ok(())
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.col < self.cols && pos.row < self.rows);
        pos.row * self.cols + pos.col
    }

    /// Get cell content at position
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Cell lookup with signed coordinates, `None` outside the grid
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if Self::is_in_grid(x, self.cols) && Self::is_in_grid(y, self.rows) {
            Some(self.cells[y as usize * self.cols + x as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn is_free(&self, pos: Pos) -> bool {
        self.cell(pos).is_neutral()
    }

    /// Pure range check `0 <= value < bound`
    #[inline]
    pub fn is_in_grid(value: i32, bound: usize) -> bool {
        value >= 0 && (value as usize) < bound
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    #[inline]
    pub fn remaining_free_cells(&self) -> usize {
        self.remaining_free
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of stones currently on the grid
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len() - self.remaining_free
    }

    /// Place a stone and apply the pair-capture rule.
    ///
    /// The caller is responsible for choosing a free cell. Returns the number
    /// of enemy pairs removed by this placement. Placing `Cell::Neutral`
    /// clears the cell instead.
    pub fn place_stone(&mut self, pos: Pos, color: Cell, pair_check: bool) -> usize {
        if color.is_neutral() {
            self.clear_cell(pos);
            return 0;
        }

        let idx = self.index(pos);
        if self.cells[idx].is_neutral() {
            self.remaining_free -= 1;
        }
        self.cells[idx] = color;
        self.last_move = Some(pos);

        if !pair_check {
            return 0;
        }

        let captured = captured_positions(self, pos, color);
        for &cap in &captured {
            let idx = self.index(cap);
            self.cells[idx] = Cell::Neutral;
        }
        self.remaining_free += captured.len();
        captured.len() / 2
    }

    /// Revert a cell to neutral (single-cell undo)
    pub fn clear_cell(&mut self, pos: Pos) {
        let idx = self.index(pos);
        if !self.cells[idx].is_neutral() {
            self.cells[idx] = Cell::Neutral;
            self.remaining_free += 1;
        }
    }

    /// Check the four lines through `pos` for five consecutive `color` cells
    /// within four cells of `pos`.
    pub fn winner_check(&self, color: Cell, pos: Pos) -> bool {
        has_five_through(self, color, pos)
    }

    /// Copy cell contents from a grid of identical dimensions.
    ///
    /// # Panics
    /// Panics if the dimensions differ: the authoritative grid and its copies
    /// are always created together, so a mismatch means they went out of sync.
    pub fn copy_from(&mut self, other: &Grid) {
        if other.cols != self.cols || other.rows != self.rows {
            panic!(
                "grid size does not match: {}x{} vs {}x{}",
                self.cols, self.rows, other.cols, other.rows
            );
        }
        self.cells.copy_from_slice(&other.cells);
        self.remaining_free = other.remaining_free;
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(col, row)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.cell(Pos::new(col, row)).symbol())
                .flat_map(|c| [c, ' '])
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
