//! Best-move selection over a finished rating grid

use rand::Rng;

use crate::board::Pos;

use super::rating::{RatingGrid, TAKEN_SPACE};

/// Odds (1 in `TIE_BREAK_ODDS`) that an exact tie replaces the current best
pub const TIE_BREAK_ODDS: u32 = 5;

struct Candidate {
    pos: Pos,
    rating: i32,
    surround: Option<f64>,
}

/// Pick the highest rated free cell.
///
/// Cells are visited in row-major order and the first best cell is kept
/// unless a later one is strictly better. Equal ratings are decided by the
/// surround rating, and equal surround ratings by a 1 in 5 draw in favour
/// of the later cell. Returns `None` when every cell is taken.
pub fn select_best_move<R: Rng + ?Sized>(ratings: &RatingGrid, rng: &mut R) -> Option<(Pos, i32)> {
    let mut best: Option<Candidate> = None;

    for row in 0..ratings.rows() {
        for col in 0..ratings.cols() {
            let pos = Pos::new(col, row);
            let rating = ratings.get(pos);
            if rating == TAKEN_SPACE {
                continue;
            }

            let replace = match &best {
                None => true,
                Some(current) if rating > current.rating => true,
                Some(current) if rating == current.rating => {
                    match (ratings.surround_rating(pos), current.surround) {
                        (Some(new), Some(old)) if new > old => true,
                        (Some(new), Some(old)) if new == old => {
                            rng.random_range(0..TIE_BREAK_ODDS) == 1
                        }
                        _ => false,
                    }
                }
                Some(_) => false,
            };

            if replace {
                best = Some(Candidate {
                    pos,
                    rating,
                    surround: ratings.surround_rating(pos),
                });
            }
        }
    }

    best.map(|c| (c.pos, c.rating))
}
