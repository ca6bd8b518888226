//! Five-in-a-row detection around the last move

use crate::board::{Cell, Grid, Pos};

/// Line directions checked through a move
const LINES: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↗
];

/// Number of cells scanned on each side of the move
const REACH: i32 = 4;

/// Find five consecutive `color` cells on a line through `pos`.
///
/// Each line is scanned over a nine cell window centered on `pos`. Cells
/// outside the grid are skipped without breaking the run; only an in-grid
/// cell of another color resets it. Returns the first five cells of the
/// first run found.
pub fn winning_line(grid: &Grid, color: Cell, pos: Pos) -> Option<[Pos; 5]> {
    if color.is_neutral() {
        return None;
    }

    for &(dx, dy) in &LINES {
        let mut run: Vec<Pos> = Vec::with_capacity(5);
        for step in -REACH..=REACH {
            let x = pos.col as i32 + dx * step;
            let y = pos.row as i32 + dy * step;
            let Some(cell) = grid.cell_at(x, y) else {
                continue;
            };
            if cell == color {
                run.push(Pos::new(x as usize, y as usize));
                if run.len() == 5 {
                    return Some([run[0], run[1], run[2], run[3], run[4]]);
                }
            } else {
                run.clear();
            }
        }
    }

    None
}

/// Whether `pos` completes five in a row for `color`
#[inline]
pub fn has_five_through(grid: &Grid, color: Cell, pos: Pos) -> bool {
    winning_line(grid, color, pos).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(stones: &[(usize, usize)], color: Cell) -> Grid {
        let mut grid = Grid::new(12, 12).unwrap();
        for &(x, y) in stones {
            grid.place_stone(Pos::new(x, y), color, false);
        }
        grid
    }

    #[test]
    fn test_five_horizontal() {
        let grid = grid_with(&[(2, 3), (3, 3), (4, 3), (5, 3), (6, 3)], Cell::Color1);
        assert!(has_five_through(&grid, Cell::Color1, Pos::new(4, 3)));
        assert!(has_five_through(&grid, Cell::Color1, Pos::new(6, 3)));
        assert!(!has_five_through(&grid, Cell::Color2, Pos::new(4, 3)));
    }

    #[test]
    fn test_five_vertical() {
        let grid = grid_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Cell::Color2);
        assert!(has_five_through(&grid, Cell::Color2, Pos::new(7, 0)));
    }

    #[test]
    fn test_five_diagonals() {
        let down = grid_with(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)], Cell::Color1);
        assert!(has_five_through(&down, Cell::Color1, Pos::new(3, 3)));

        let up = grid_with(&[(1, 9), (2, 8), (3, 7), (4, 6), (5, 5)], Cell::Color1);
        assert!(has_five_through(&up, Cell::Color1, Pos::new(1, 9)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let grid = grid_with(&[(2, 3), (3, 3), (4, 3), (5, 3)], Cell::Color1);
        for x in 2..=5 {
            assert!(!has_five_through(&grid, Cell::Color1, Pos::new(x, 3)));
        }
    }

    #[test]
    fn test_gap_breaks_the_run() {
        let grid = grid_with(&[(1, 3), (2, 3), (4, 3), (5, 3), (6, 3)], Cell::Color1);
        assert!(!has_five_through(&grid, Cell::Color1, Pos::new(4, 3)));
    }

    #[test]
    fn test_run_outside_window_is_ignored() {
        // Five in a row exists but ends more than four cells from the probe
        let grid = grid_with(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], Cell::Color1);
        assert!(!has_five_through(&grid, Cell::Color1, Pos::new(9, 0)));
    }

    #[test]
    fn test_five_at_border() {
        let grid = grid_with(&[(7, 11), (8, 11), (9, 11), (10, 11), (11, 11)], Cell::Color2);
        assert!(has_five_through(&grid, Cell::Color2, Pos::new(11, 11)));
    }

    #[test]
    fn test_winning_line_positions() {
        let grid = grid_with(&[(2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3)], Cell::Color1);
        let line = winning_line(&grid, Cell::Color1, Pos::new(6, 3)).unwrap();
        assert_eq!(line[0], Pos::new(2, 3));
        assert_eq!(line[4], Pos::new(6, 3));
    }
}
