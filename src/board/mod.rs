//! Board representation for Gomoku

pub mod grid;


// Re-exports
pub use grid::Grid;

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Neutral,
    Color1,
    Color2,
}

impl Cell {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Color1 => Cell::Color2,
            Cell::Color2 => Cell::Color1,
            Cell::Neutral => Cell::Neutral,
        }
    }

    #[inline]
    pub fn is_neutral(self) -> bool {
        self == Cell::Neutral
    }

    /// Single character used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Neutral => '.',
            Cell::Color1 => 'X',
            Cell::Color2 => 'O',
        }
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Step `n` cells in direction (dx, dy), `None` when the result
    /// would leave a `cols x rows` grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32, cols: usize, rows: usize) -> Option<Pos> {
        let x = self.col as i64 + i64::from(dx) * i64::from(n);
        let y = self.row as i64 + i64::from(dy) * i64::from(n);
        if x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
