//! Segment scores and bias profiles
//!
//! A 5-cell segment is rated by how many stones of a single color it holds.
//! The table is strongly non-linear so that one segment with four stones
//! outweighs many segments with one or two.

use serde::{Deserialize, Serialize};

/// Score per number of stones in a live segment (index = stone count)
pub const SEGMENT_SCORES: [i32; 6] = [0, 1, 4, 16, 64, 512];

/// Penalty for an own pair the enemy could capture on the next move
pub const PAIR_THREAT_PENALTY: i32 = 16;

/// Largest configurable segment score
pub const MAX_SEGMENT_SCORE: i32 = 1 << 16;

/// Largest configurable own or enemy weight
pub const MAX_WEIGHT: i32 = 64;

/// Largest configurable pair threat penalty
pub const MAX_PAIR_THREAT_PENALTY: i32 = 1 << 16;

/// Weighting of the segment rating for one AI personality.
///
/// A segment contributes `own_weight * table[own] - enemy_weight * table[enemy]`.
/// The enemy is weighted at least as heavily as the AI itself because the
/// board is rated after the AI's hypothetical move, with the enemy to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasProfile {
    pub score_table: [i32; 6],
    pub own_weight: i32,
    pub enemy_weight: i32,
    pub pair_threat_penalty: i32,
}

impl BiasProfile {
    /// Balanced reference weighting
    pub const REFERENCE: BiasProfile = BiasProfile {
        score_table: SEGMENT_SCORES,
        own_weight: 1,
        enemy_weight: 2,
        pair_threat_penalty: PAIR_THREAT_PENALTY,
    };

    /// Values own chances as much as enemy threats and worries less about pairs
    pub const AGGRESSIVE: BiasProfile = BiasProfile {
        score_table: SEGMENT_SCORES,
        own_weight: 2,
        enemy_weight: 2,
        pair_threat_penalty: PAIR_THREAT_PENALTY / 2,
    };

    /// Blocks enemy lines first and guards its pairs closely
    pub const DEFENSIVE: BiasProfile = BiasProfile {
        score_table: SEGMENT_SCORES,
        own_weight: 1,
        enemy_weight: 4,
        pair_threat_penalty: PAIR_THREAT_PENALTY * 2,
    };

    /// Rating of a single segment holding `own` AI stones or `enemy` enemy stones.
    ///
    /// At most one of the two counts is non-zero for a live segment.
    #[inline]
    pub fn rate_segment(&self, own: usize, enemy: usize) -> i64 {
        i64::from(self.own_weight) * i64::from(self.score_table[own.min(5)])
            - i64::from(self.enemy_weight) * i64::from(self.score_table[enemy.min(5)])
    }

    /// Check that the profile produces a sensible ordering of moves
    pub fn validate(&self) -> Result<(), String> {
        if self.score_table[0] != 0 {
            return Err("score_table[0] must be 0".into());
        }
        if self.score_table.windows(2).any(|w| w[0] >= w[1]) {
            return Err("score_table must be strictly increasing".into());
        }
        if self.score_table[5] > MAX_SEGMENT_SCORE {
            return Err(format!("score_table[5] must be <= {MAX_SEGMENT_SCORE}"));
        }
        if self.own_weight <= 0 || self.enemy_weight <= 0 {
            return Err("own_weight and enemy_weight must be > 0".into());
        }
        if self.own_weight > MAX_WEIGHT || self.enemy_weight > MAX_WEIGHT {
            return Err(format!("own_weight and enemy_weight must be <= {MAX_WEIGHT}"));
        }
        if !(0..=MAX_PAIR_THREAT_PENALTY).contains(&self.pair_threat_penalty) {
            return Err(format!(
                "pair_threat_penalty must be in 0..={MAX_PAIR_THREAT_PENALTY}"
            ));
        }
        Ok(())
    }
}

impl Default for BiasProfile {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Bias profile for each AI personality, loadable from the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSet {
    pub reference: BiasProfile,
    pub aggressive: BiasProfile,
    pub defensive: BiasProfile,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self {
            reference: BiasProfile::REFERENCE,
            aggressive: BiasProfile::AGGRESSIVE,
            defensive: BiasProfile::DEFENSIVE,
        }
    }
}

impl ProfileSet {
    pub fn validate(&self) -> Result<(), String> {
        for (name, profile) in [
            ("reference", &self.reference),
            ("aggressive", &self.aggressive),
            ("defensive", &self.defensive),
        ] {
            profile
                .validate()
                .map_err(|msg| format!("profiles.{name}: {msg}"))?;
        }
        Ok(())
    }
}
