use crate::domain::sequencer::{Destination, PhaseSequencer};
use crate::domain::Card;

/// Whether the end-of-round score reveal has gone out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRequested,
    Requested,
    Revealed,
}

/// Client-local bookkeeping for one round. Never sent to the authority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundProgress {
    pub sequencer: PhaseSequencer,
    /// Display only.
    pub crib: Vec<Card>,
    /// Display only; cleared when a turn ends.
    pub play_area: Vec<Card>,
    pub reveal: RevealState,
    /// The current stalemate has already been reported to the authority.
    pub turn_settled: bool,
}

impl RoundProgress {
    pub fn new_game() -> Self {
        Self {
            sequencer: PhaseSequencer::new_game(),
            ..Self::default()
        }
    }

    pub fn next_round() -> Self {
        Self {
            sequencer: PhaseSequencer::next_round(),
            ..Self::default()
        }
    }

    pub fn place(&mut self, card: Card, destination: Destination) {
        match destination {
            Destination::Crib => self.crib.push(card),
            Destination::PlayArea => self.play_area.push(card),
        }
    }
}
