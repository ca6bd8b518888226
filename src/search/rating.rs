//! Per-cell one-ply ratings

use crate::board::Pos;
use crate::error::GridError;

/// Reserved marker for a cell that already holds a stone. Evaluated cells
/// never carry this value; selection skips it.
pub const TAKEN_SPACE: i32 = -20_000;

/// `cols x rows` array of one-ply ratings, recomputed every turn
#[derive(Debug, Clone, Default)]
pub struct RatingGrid {
    cols: usize,
    rows: usize,
    values: Vec<i32>,
}

impl RatingGrid {
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        let mut ratings = Self::default();
        ratings.resize(cols, rows)?;
        Ok(ratings)
    }

    /// Reallocate for a new grid size, every cell starting as taken
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<(), GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidSize { cols, rows });
        }
        let total = cols
            .checked_mul(rows)
            .ok_or(GridError::InvalidSize { cols, rows })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(total)
            .map_err(|source| GridError::Allocation { cells: total, source })?;
        values.resize(total, TAKEN_SPACE);

        self.cols = cols;
        self.rows = rows;
        self.values = values;
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
    pub fn get(&self, pos: Pos) -> i32 {
        self.values[pos.row * self.cols + pos.col]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, rating: i32) {
        self.values[pos.row * self.cols + pos.col] = rating;
    }

    /// Mean rating of the evaluated 8-neighbours of `pos`.
    ///
    /// `None` when no neighbour was evaluated (all taken or off the grid).
    pub fn surround_rating(&self, pos: Pos) -> Option<f64> {
        let mut sum = 0i64;
        let mut count = 0u32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(n) = pos.offset(dx, dy, 1, self.cols, self.rows) else {
                    continue;
                };
                let rating = self.get(n);
                if rating != TAKEN_SPACE {
                    sum += i64::from(rating);
                    count += 1;
                }
            }
        }
        (count > 0).then(|| sum as f64 / f64::from(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ratings_are_taken() {
        let ratings = RatingGrid::new(4, 3).unwrap();
        assert_eq!(ratings.cols(), 4);
        assert_eq!(ratings.rows(), 3);
        assert_eq!(ratings.get(Pos::new(3, 2)), TAKEN_SPACE);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(RatingGrid::new(0, 3).is_err());
    }

    #[test]
    fn test_surround_rating_skips_taken_neighbours() {
        let mut ratings = RatingGrid::new(3, 3).unwrap();
        ratings.set(Pos::new(0, 0), 10);
        ratings.set(Pos::new(2, 2), 20);
        ratings.set(Pos::new(1, 1), 1000);
        assert_eq!(ratings.surround_rating(Pos::new(1, 1)), Some(15.0));
    }

    #[test]
    fn test_surround_rating_at_corner() {
        let mut ratings = RatingGrid::new(3, 3).unwrap();
        ratings.set(Pos::new(1, 0), 4);
        ratings.set(Pos::new(0, 1), 6);
        ratings.set(Pos::new(1, 1), -4);
        assert_eq!(ratings.surround_rating(Pos::new(0, 0)), Some(2.0));
    }

    #[test]
    fn test_surround_rating_without_neighbours() {
        let mut ratings = RatingGrid::new(3, 3).unwrap();
        ratings.set(Pos::new(1, 1), 7);
        assert_eq!(ratings.surround_rating(Pos::new(1, 1)), None);
    }
}
