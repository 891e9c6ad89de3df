use tracing::{debug, info};

use super::{Effect, FlowStatus, GameFlow, Intent, Notice, Prompt};
use crate::domain::{is_playable_with, Card, Destination, PlayerId};
use crate::error::ClientError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::sync::AuthorityRequest;

impl GameFlow {
    /// Route a selected card and submit it.
    ///
    /// Every check runs before anything is touched, so a rejected selection
    /// leaves the table exactly as it was and sends nothing.
    pub(super) fn select_card(
        &mut self,
        who: PlayerId,
        card: Card,
    ) -> Result<Vec<Effect>, ClientError> {
        self.require_ready()?;

        if !self.session.phase.accepts_cards() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!(
                    "cards cannot be placed while the game is {}",
                    self.session.phase.as_wire()
                ),
            )
            .into());
        }

        let hand = self.session.hand(who)?;
        if !hand.contains(&card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} is not in player {}'s hand", who + 1),
            )
            .into());
        }

        let mut sequencer = self.round.sequencer.clone();
        let routed = sequencer.route(who)?;

        let running_sum = self.running_sum_in_play();
        if routed.destination == Destination::PlayArea
            && !is_playable_with(card, running_sum, self.counting)
        {
            return Err(DomainError::validation(
                ValidationKind::CardNotPlayable,
                format!(
                    "Card Not Playable: {card} would take the running sum past 31 (now {running_sum})"
                ),
            )
            .into());
        }

        let rollback = self.snapshot();
        self.session.take_card(who, card)?;
        self.round.sequencer = sequencer;
        self.round.place(card, routed.destination);
        debug!(player = who, %card, destination = ?routed.destination, "card placed");

        let mut effects = Vec::with_capacity(2);
        if routed.play_began {
            info!("crib complete; play begins");
            effects.push(Effect::Notice(Notice::PlayBegins));
        }
        effects.push(self.issue(
            AuthorityRequest::PlayCard {
                card,
                phase: routed.destination.wire_phase(),
            },
            Intent::Submit {
                who,
                destination: routed.destination,
            },
            rollback,
        ));
        Ok(effects)
    }

    pub(super) fn acknowledge(&mut self) -> Result<Vec<Effect>, ClientError> {
        match &self.status {
            FlowStatus::AwaitingAcknowledgment(Prompt::GameWon { winner }) => {
                info!(winner = winner + 1, "continuation accepted; starting a new game");
                let rollback = self.snapshot();
                Ok(vec![self.issue(
                    AuthorityRequest::StartNewGame,
                    Intent::NewGame,
                    rollback,
                )])
            }
            FlowStatus::AwaitingAcknowledgment(Prompt::Failure(_)) => {
                self.status = FlowStatus::Ready;
                Ok(self.evaluate())
            }
            _ => Err(ClientError::phase_mismatch("nothing to acknowledge")),
        }
    }

    pub(super) fn cancel(&mut self) -> Result<Vec<Effect>, ClientError> {
        match &self.status {
            FlowStatus::AwaitingAcknowledgment(Prompt::GameWon { winner }) => {
                info!(winner = winner + 1, "continuation declined; table halted");
                self.status = FlowStatus::Halted;
                Ok(vec![Effect::Notice(Notice::GameDeclined)])
            }
            FlowStatus::AwaitingAcknowledgment(Prompt::Failure(_)) => self.acknowledge(),
            // The driver owns the in-flight request and aborts it; its
            // failure arrives as a NetworkError.
            FlowStatus::AwaitingReply(_) => Ok(Vec::new()),
            FlowStatus::Ready | FlowStatus::Halted => {
                Err(ClientError::phase_mismatch("nothing to cancel"))
            }
        }
    }

    pub(super) fn request_new_game(&mut self) -> Result<Vec<Effect>, ClientError> {
        match &self.status {
            FlowStatus::Ready
            | FlowStatus::Halted
            | FlowStatus::AwaitingAcknowledgment(Prompt::GameWon { .. }) => {
                let rollback = self.snapshot();
                Ok(vec![self.issue(
                    AuthorityRequest::StartNewGame,
                    Intent::NewGame,
                    rollback,
                )])
            }
            FlowStatus::AwaitingReply(_) => Err(in_flight()),
            FlowStatus::AwaitingAcknowledgment(Prompt::Failure(_)) => Err(
                ClientError::phase_mismatch("acknowledge the failure before starting a new game"),
            ),
        }
    }

    pub(super) fn refresh(&mut self) -> Result<Vec<Effect>, ClientError> {
        match &self.status {
            FlowStatus::Ready | FlowStatus::Halted => {
                let rollback = self.snapshot();
                Ok(vec![self.issue(
                    AuthorityRequest::FetchCurrentGame,
                    Intent::Load,
                    rollback,
                )])
            }
            FlowStatus::AwaitingReply(_) => Err(in_flight()),
            FlowStatus::AwaitingAcknowledgment(_) => {
                Err(ClientError::phase_mismatch("answer the open prompt first"))
            }
        }
    }

    fn require_ready(&self) -> Result<(), ClientError> {
        match &self.status {
            FlowStatus::Ready => Ok(()),
            FlowStatus::AwaitingReply(_) => Err(in_flight()),
            FlowStatus::AwaitingAcknowledgment(_) => {
                Err(ClientError::phase_mismatch("answer the open prompt first"))
            }
            FlowStatus::Halted => Err(ClientError::phase_mismatch(
                "the game is over; start a new game to keep playing",
            )),
        }
    }
}

fn in_flight() -> ClientError {
    ClientError::invalid(
        ErrorCode::RequestInFlight,
        "a request to the authority is already in flight",
    )
}
