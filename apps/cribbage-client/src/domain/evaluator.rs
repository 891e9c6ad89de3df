//! Legal-move evaluation against the running sum.
//!
//! Evaluation only: it reports when nobody can play and leaves the decision
//! about what happens next to the orchestrator.

use crate::domain::rules::{CountingRule, PLAYERS, RUNNING_SUM_CAP};
use crate::domain::state::PlayerId;
use crate::domain::Card;

/// `card.rank + running_sum <= 31`, counting the raw rank.
pub fn is_playable(card: Card, running_sum: u8) -> bool {
    is_playable_with(card, running_sum, CountingRule::RawRank)
}

pub fn is_playable_with(card: Card, running_sum: u8, rule: CountingRule) -> bool {
    u16::from(running_sum) + u16::from(rule.count(card)) <= u16::from(RUNNING_SUM_CAP)
}

/// Per-card playability for both hands at one running sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playability {
    pub cards: [Vec<(Card, bool)>; PLAYERS],
}

impl Playability {
    pub fn has_playable(&self, who: PlayerId) -> bool {
        self.cards
            .get(who as usize)
            .is_some_and(|hand| hand.iter().any(|(_, ok)| *ok))
    }

    /// Neither player holds a card that fits under the cap.
    pub fn no_legal_moves(&self) -> bool {
        (0..PLAYERS as PlayerId).all(|p| !self.has_playable(p))
    }
}

pub fn evaluate_hands(
    hands: &[Vec<Card>; PLAYERS],
    running_sum: u8,
    rule: CountingRule,
) -> Playability {
    let cards = hands.clone().map(|hand| {
        hand.into_iter()
            .map(|card| (card, is_playable_with(card, running_sum, rule)))
            .collect::<Vec<_>>()
    });
    Playability { cards }
}
