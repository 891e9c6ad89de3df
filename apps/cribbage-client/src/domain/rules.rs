use std::str::FromStr;

use crate::domain::Card;
use crate::errors::domain::DomainError;

pub const PLAYERS: usize = 2;
/// Cap on the pegging total.
pub const RUNNING_SUM_CAP: u8 = 31;
/// Cards the authority deals to each player per round.
pub const CARDS_DEALT: usize = 6;

/// Crib cards each player contributes: two on the game's first round, one after.
pub fn required_crib_cards(is_first_round_of_game: bool) -> u8 {
    if is_first_round_of_game {
        2
    } else {
        1
    }
}

/// How a card counts toward the running sum when checking playability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountingRule {
    /// Face value 1..=13, jacks through kings included.
    #[default]
    RawRank,
    /// Pegging value, faces count 10 (what the authority adds to the sum).
    Pip,
}

impl CountingRule {
    pub fn count(self, card: Card) -> u8 {
        match self {
            CountingRule::RawRank => card.rank.value(),
            CountingRule::Pip => card.rank.pip_value(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountingRule::RawRank => "raw",
            CountingRule::Pip => "pip",
        }
    }
}

impl FromStr for CountingRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "rank" => Ok(CountingRule::RawRank),
            "pip" | "pips" => Ok(CountingRule::Pip),
            other => Err(DomainError::validation_other(format!(
                "unknown counting rule '{other}' (expected raw or pip)"
            ))),
        }
    }
}
