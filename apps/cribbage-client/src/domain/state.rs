use crate::domain::rules::PLAYERS;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..=1

/// Game phase as the authority reports it.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Nothing dealt yet.
    #[default]
    Dealing,
    /// Hands dealt; players route cards to the crib.
    CribCollection,
    /// Pegging against the running sum.
    Play,
    /// Hands and crib are counted.
    Show,
    /// A player reached the winning score.
    Over,
}

impl Phase {
    /// Phases in which a selected card has somewhere to go.
    pub fn accepts_cards(self) -> bool {
        matches!(self, Phase::CribCollection | Phase::Play)
    }
}

/// Client mirror of the authority's game, replaced wholesale on every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
    /// Display order only.
    pub hands: [Vec<Card>; PLAYERS],
    pub scores: [u32; PLAYERS],
    pub running_sum: u8,
    pub has_legal_move: [bool; PLAYERS],
    pub won: [bool; PLAYERS],
}

impl SessionState {
    /// Process-start state before the first fetch.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn hand(&self, who: PlayerId) -> Result<&[Card], DomainError> {
        Ok(&self.hands[require_player(who)?])
    }

    pub fn hands_exhausted(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }

    /// Authority flags say nobody can extend the running sum.
    pub fn nobody_has_legal_move(&self) -> bool {
        self.has_legal_move.iter().all(|has| !has)
    }

    /// First player whose won flag is set.
    pub fn winner(&self) -> Option<PlayerId> {
        self.won.iter().position(|&w| w).map(|p| p as PlayerId)
    }

    pub fn holder_of(&self, card: Card) -> Option<PlayerId> {
        self.hands
            .iter()
            .position(|hand| hand.contains(&card))
            .map(|p| p as PlayerId)
    }

    /// Removes `card` from `who`'s hand for optimistic placement.
    pub fn take_card(&mut self, who: PlayerId, card: Card) -> Result<Card, DomainError> {
        let hand = &mut self.hands[require_player(who)?];
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} is not in player {}'s hand", who + 1),
            ));
        };
        Ok(hand.remove(pos))
    }
}

pub fn require_player(who: PlayerId) -> Result<usize, DomainError> {
    let idx = who as usize;
    if idx < PLAYERS {
        Ok(idx)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            format!("no player {}", u16::from(who) + 1),
        ))
    }
}
