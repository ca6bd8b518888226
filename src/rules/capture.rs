//! Pair capture rule
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use crate::board::{Cell, Grid, Pos};

/// All eight directions a capture can run in
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Check whether a `color` stone at `pos` sandwiches an enemy pair in
/// direction (dx, dy) against an own stone three cells away.
///
/// Directions whose third cell lies outside the grid never capture.
pub fn sandwiches_pair(grid: &Grid, pos: Pos, dx: i32, dy: i32, color: Cell) -> bool {
    if color.is_neutral() {
        return false;
    }
    let enemy = color.opponent();
    let (cols, rows) = (grid.cols(), grid.rows());

    // Check bounds for the farthest position
    let Some(end) = pos.offset(dx, dy, 3, cols, rows) else {
        return false;
    };
    let (Some(first), Some(second)) = (
        pos.offset(dx, dy, 1, cols, rows),
        pos.offset(dx, dy, 2, cols, rows),
    ) else {
        return false;
    };

    grid.cell(first) == enemy && grid.cell(second) == enemy && grid.cell(end) == color
}

/// Find the enemy stones that a `color` stone at `pos` captures.
///
/// Returns the captured positions in pairs, one pair per capturing direction.
pub fn captured_positions(grid: &Grid, pos: Pos, color: Cell) -> Vec<Pos> {
    let mut captured = Vec::new();
    let (cols, rows) = (grid.cols(), grid.rows());

    for &(dx, dy) in &DIRECTIONS {
        if !sandwiches_pair(grid, pos, dx, dy, color) {
            continue;
        }
        if let (Some(first), Some(second)) = (
            pos.offset(dx, dy, 1, cols, rows),
            pos.offset(dx, dy, 2, cols, rows),
        ) {
            captured.push(first);
            captured.push(second);
        }
    }

    captured
}

/// Count how many pairs a move would capture
#[inline]
pub fn count_captures(grid: &Grid, pos: Pos, color: Cell) -> usize {
    DIRECTIONS
        .iter()
        .filter(|&&(dx, dy)| sandwiches_pair(grid, pos, dx, dy, color))
        .count()
}
