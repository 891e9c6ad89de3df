use tracing::{info, warn};

use super::{Effect, FlowStatus, GameFlow, Intent, Notice, Pending, Prompt};
use crate::domain::{PhaseSequencer, RevealState, RoundProgress, RoundStage, SessionState};
use crate::error::ClientError;

impl GameFlow {
    fn take_pending(&mut self, what: &str) -> Result<Pending, ClientError> {
        match std::mem::replace(&mut self.status, FlowStatus::Ready) {
            FlowStatus::AwaitingReply(pending) => Ok(*pending),
            other => {
                self.status = other;
                Err(ClientError::unexpected_reply(format!(
                    "{what} arrived with no request outstanding"
                )))
            }
        }
    }

    /// Authoritative reply: replaces the session verbatim, then re-inspects.
    pub(super) fn reply_received(
        &mut self,
        state: SessionState,
    ) -> Result<Vec<Effect>, ClientError> {
        let pending = self.take_pending("reply")?;
        info!(
            request = %pending.request,
            phase = state.phase.as_wire(),
            scores = ?state.scores,
            running_sum = state.running_sum,
            "reply merged"
        );
        self.session = state;

        let mut effects = Vec::new();
        match pending.intent {
            Intent::Load => {
                self.round = RoundProgress {
                    sequencer: PhaseSequencer::resume(&self.session),
                    ..RoundProgress::default()
                };
                if self.session.phase.accepts_cards()
                    && self.round.sequencer.stage() == RoundStage::CollectingCrib
                {
                    effects.push(self.collect_crib_notice());
                }
            }
            Intent::NewGame => {
                self.round = RoundProgress::new_game();
                effects.push(self.collect_crib_notice());
            }
            Intent::NewRound => {
                self.round = RoundProgress::next_round();
                effects.push(self.collect_crib_notice());
            }
            Intent::Submit { .. } => {
                self.round.turn_settled = false;
            }
            Intent::TurnCompleted | Intent::Go => {
                self.round.turn_settled = true;
                self.round.play_area.clear();
            }
            Intent::RoundReveal => {
                self.round.reveal = RevealState::Revealed;
                effects.push(Effect::Notice(Notice::ScoresRevealed));
            }
        }

        effects.extend(self.evaluate());
        Ok(effects)
    }

    /// Failed round trip: the pre-request state comes back untouched.
    pub(super) fn request_failed(&mut self, err: ClientError) -> Result<Vec<Effect>, ClientError> {
        let pending = self.take_pending("failure")?;
        self.restore(pending.rollback);

        if err == ClientError::Cancelled {
            info!(request = %pending.request, "request cancelled; state rolled back");
            return Ok(vec![Effect::Notice(Notice::RequestCancelled)]);
        }

        let err = match (pending.intent, err) {
            (Intent::Submit { .. }, ClientError::AuthorityRejected { status, detail })
                if (400..500).contains(&status) =>
            {
                ClientError::illegal_move(detail)
            }
            (_, other) => other,
        };
        warn!(
            request = %pending.request,
            code = %err.code(),
            error = %err,
            "request failed; state rolled back"
        );

        let prompt = Prompt::Failure(err);
        self.status = FlowStatus::AwaitingAcknowledgment(prompt.clone());
        Ok(vec![Effect::Prompt(prompt)])
    }

    fn collect_crib_notice(&self) -> Effect {
        Effect::Notice(Notice::CollectCrib {
            required: self.round.sequencer.required_crib_cards(),
        })
    }
}
