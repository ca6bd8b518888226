//! Board evaluation for the AI players
//!
//! Contains:
//! - Segment score tables and per-personality bias profiles
//! - The 5-cell sliding window used to sweep lines
//! - The whole-board evaluator

pub mod heuristic;
pub mod patterns;
pub mod segment;

pub use heuristic::Evaluator;
pub use patterns::{BiasProfile, ProfileSet, PAIR_THREAT_PENALTY, SEGMENT_SCORES};
pub use segment::{Segment, SEGMENT_LEN};
