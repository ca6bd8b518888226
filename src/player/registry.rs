//! Factory mapping a player kind to its implementation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eval::ProfileSet;

use super::{HumanPlayer, Player, RandomAi, ReferenceAi};

/// Every player implementation that can take a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    Random,
    Reference,
    Aggressive,
    Defensive,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 5] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::Reference,
        PlayerKind::Aggressive,
        PlayerKind::Defensive,
    ];

    /// Identifier used in settings files and on the command line
    pub fn id(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Reference => "reference",
            PlayerKind::Aggressive => "aggressive",
            PlayerKind::Defensive => "defensive",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Random => "Random AI",
            PlayerKind::Reference => "Reference AI",
            PlayerKind::Aggressive => "Aggressive AI",
            PlayerKind::Defensive => "Defensive AI",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlayerKind::Human => "Moves are picked with the mouse or keyboard",
            PlayerKind::Random => "Plays a random free cell",
            PlayerKind::Reference => "One-ply search with balanced weighting",
            PlayerKind::Aggressive => "One-ply search favouring its own lines",
            PlayerKind::Defensive => "One-ply search favouring blocks",
        }
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, PlayerKind::Human)
    }

    /// Build a fresh player of this kind
    pub fn create(self, profiles: &ProfileSet) -> Box<dyn Player> {
        let name = self.display_name();
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new()),
            PlayerKind::Random => Box::new(RandomAi::new()),
            PlayerKind::Reference => Box::new(ReferenceAi::with_profile(name, profiles.reference)),
            PlayerKind::Aggressive => {
                Box::new(ReferenceAi::with_profile(name, profiles.aggressive))
            }
            PlayerKind::Defensive => Box::new(ReferenceAi::with_profile(name, profiles.defensive)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = PlayerKind::ALL.iter().map(|k| k.id()).collect();
                format!("unknown player '{s}', expected one of: {}", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for kind in PlayerKind::ALL {
            assert_eq!(kind.id().parse::<PlayerKind>(), Ok(kind));
        }
        assert_eq!(" Defensive ".parse::<PlayerKind>(), Ok(PlayerKind::Defensive));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "network".parse::<PlayerKind>().unwrap_err();
        assert!(err.contains("unknown player 'network'"), "{err}");
        assert!(err.contains("reference"), "{err}");
    }

    #[test]
    fn test_created_players_match_kind() {
        let profiles = ProfileSet::default();
        for kind in PlayerKind::ALL {
            let player = kind.create(&profiles);
            assert_eq!(player.name(), kind.display_name());
            assert_eq!(player.is_interactive(), kind.is_interactive());
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        #[derive(Deserialize)]
        struct Seat {
            player: PlayerKind,
        }
        let seat: Seat = toml::from_str("player = \"aggressive\"").unwrap();
        assert_eq!(seat.player, PlayerKind::Aggressive);
    }
}
