//! Crib contribution counting and the per-round stage machine.
//!
//! `CollectingCrib -> Playing -> Showing`, linear within a round. A new round
//! always starts over in `CollectingCrib`.

use tracing::debug;

use crate::domain::rules::{required_crib_cards, CARDS_DEALT, PLAYERS};
use crate::domain::state::{require_player, Phase, PlayerId, SessionState};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStage {
    CollectingCrib,
    Playing,
    Showing,
}

/// Where a selected card is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Crib,
    PlayArea,
}

impl Destination {
    /// Phase value sent alongside the card (`DEAL` for the crib).
    pub fn wire_phase(self) -> Phase {
        match self {
            Destination::Crib => Phase::CribCollection,
            Destination::PlayArea => Phase::Play,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub destination: Destination,
    /// This selection completed the crib and moved the round into play.
    pub play_began: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSequencer {
    stage: RoundStage,
    first_round_of_game: bool,
    collected: [u8; PLAYERS],
}

impl PhaseSequencer {
    pub fn new_game() -> Self {
        Self::fresh(true)
    }

    pub fn next_round() -> Self {
        Self::fresh(false)
    }

    /// Positions a sequencer for a game loaded mid-way, treating it as the
    /// game's first round. Crib contributions are inferred from how many of
    /// the dealt cards are already gone.
    pub fn resume(state: &SessionState) -> Self {
        let mut seq = Self::new_game();
        match state.phase {
            Phase::Dealing | Phase::Over => {}
            Phase::CribCollection => {
                let required = seq.required_crib_cards();
                for (slot, hand) in seq.collected.iter_mut().zip(&state.hands) {
                    let gone = CARDS_DEALT.saturating_sub(hand.len());
                    *slot = u8::try_from(gone).unwrap_or(u8::MAX).min(required);
                }
                if seq.crib_complete() {
                    seq.stage = RoundStage::Playing;
                }
            }
            Phase::Play => {
                seq.collected = [seq.required_crib_cards(); PLAYERS];
                seq.stage = RoundStage::Playing;
            }
            Phase::Show => {
                seq.collected = [seq.required_crib_cards(); PLAYERS];
                seq.stage = RoundStage::Showing;
            }
        }
        seq
    }

    fn fresh(first_round_of_game: bool) -> Self {
        Self {
            stage: RoundStage::CollectingCrib,
            first_round_of_game,
            collected: [0; PLAYERS],
        }
    }

    pub fn stage(&self) -> RoundStage {
        self.stage
    }

    pub fn is_first_round_of_game(&self) -> bool {
        self.first_round_of_game
    }

    pub fn required_crib_cards(&self) -> u8 {
        required_crib_cards(self.first_round_of_game)
    }

    pub fn collected(&self, who: PlayerId) -> u8 {
        self.collected.get(who as usize).copied().unwrap_or(0)
    }

    fn crib_complete(&self) -> bool {
        let required = self.required_crib_cards();
        self.collected.iter().all(|&c| c >= required)
    }

    /// Decides where `who`'s next selection goes and advances the stage.
    ///
    /// Selections past a player's requirement go to the play area even while
    /// the other player is still contributing.
    pub fn route(&mut self, who: PlayerId) -> Result<Routed, DomainError> {
        let idx = require_player(who)?;
        match self.stage {
            RoundStage::CollectingCrib if self.collected[idx] < self.required_crib_cards() => {
                self.collected[idx] += 1;
                let play_began = self.crib_complete();
                if play_began {
                    self.stage = RoundStage::Playing;
                    debug!(player = who, "crib complete; play begins");
                }
                Ok(Routed {
                    destination: Destination::Crib,
                    play_began,
                })
            }
            RoundStage::CollectingCrib | RoundStage::Playing => Ok(Routed {
                destination: Destination::PlayArea,
                play_began: false,
            }),
            RoundStage::Showing => Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "round is being shown; no card can be placed",
            )),
        }
    }

    /// `Playing -> Showing` once both hands are empty. Returns true when the
    /// transition fires.
    pub fn observe_hands(&mut self, hands: &[Vec<Card>; PLAYERS]) -> bool {
        if self.stage == RoundStage::Playing && hands.iter().all(Vec::is_empty) {
            self.stage = RoundStage::Showing;
            debug!("hands exhausted; round moves to show");
            return true;
        }
        false
    }
}

impl Default for PhaseSequencer {
    fn default() -> Self {
        Self::new_game()
    }
}
