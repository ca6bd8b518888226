//! One-ply move search for the reference AI
//!
//! Contains:
//! - The rating grid holding the score of every candidate cell
//! - A resumable scan that rates one row per step on a working copy
//! - Best-move selection with the surround-rating tie-break

pub mod rating;
pub mod scan;
pub mod select;

pub use rating::{RatingGrid, TAKEN_SPACE};
pub use scan::{RowScan, ScanProgress, ScanState};
pub use select::{select_best_move, TIE_BREAK_ODDS};
