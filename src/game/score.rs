//! In-memory scoreboard keyed by player name

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub total_games: u32,
    pub wins: u32,
}

impl Score {
    pub fn losses(&self) -> u32 {
        self.total_games - self.wins
    }
}

/// Player names are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    /// Keyed by lowercased name, keeps the first spelling for display
    entries: BTreeMap<String, (String, Score)>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Record a decided game. Games between two players of the same name
    /// are not counted; returns whether the game was recorded.
    pub fn record_game(&mut self, winner: &str, loser: &str) -> bool {
        if Self::key(winner) == Self::key(loser) {
            return false;
        }
        self.entry(winner).total_games += 1;
        self.entry(winner).wins += 1;
        self.entry(loser).total_games += 1;
        true
    }

    fn entry(&mut self, name: &str) -> &mut Score {
        &mut self
            .entries
            .entry(Self::key(name))
            .or_insert_with(|| (name.to_string(), Score::default()))
            .1
    }

    pub fn get(&self, name: &str) -> Option<Score> {
        self.entries.get(&Self::key(name)).map(|(_, score)| *score)
    }

    /// All entries sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> + '_ {
        self.entries.values().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_winner_and_loser() {
        let mut board = ScoreBoard::new();
        assert!(board.record_game("Reference AI", "Random AI"));
        assert!(board.record_game("Random AI", "Reference AI"));
        assert!(board.record_game("Reference AI", "Random AI"));

        let reference = board.get("Reference AI").unwrap();
        assert_eq!(reference, Score { total_games: 3, wins: 2 });
        assert_eq!(board.get("Random AI").unwrap().losses(), 2);
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut board = ScoreBoard::new();
        board.record_game("Human", "Defensive AI");
        board.record_game("HUMAN", "defensive ai");
        assert_eq!(board.get("human").unwrap().wins, 2);
        assert_eq!(board.iter().count(), 2);
        assert_eq!(board.iter().next().unwrap().0, "Defensive AI");
    }

    #[test]
    fn test_mirror_match_not_recorded() {
        let mut board = ScoreBoard::new();
        assert!(!board.record_game("Reference AI", "reference ai"));
        assert!(board.is_empty());
    }
}
