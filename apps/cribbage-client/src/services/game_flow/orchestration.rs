use tracing::info;

use super::{Effect, FlowStatus, GameFlow, Intent, Notice, Prompt};
use crate::domain::{Phase, RevealState, RoundStage, SessionState};
use crate::sync::AuthorityRequest;

/// How a pegging stalemate is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nobody can play and the sum is already zero.
    TurnCompleted,
    /// Nobody can extend a non-zero sum.
    Go,
}

/// `Some` only when neither player has a legal move; one blocked player is
/// not a stalemate.
pub fn turn_outcome(session: &SessionState) -> Option<TurnOutcome> {
    if !session.nobody_has_legal_move() {
        return None;
    }
    Some(if session.running_sum == 0 {
        TurnOutcome::TurnCompleted
    } else {
        TurnOutcome::Go
    })
}

impl GameFlow {
    /// Inspect the table after a reply (or an acknowledged failure) and
    /// request whatever automatic transition is due.
    ///
    /// Rules in priority order: a win, round exhaustion, then a pegging
    /// stalemate. At most one request is issued. Every transition is only a
    /// request; the reply decides.
    pub(super) fn evaluate(&mut self) -> Vec<Effect> {
        if !matches!(self.status, FlowStatus::Ready) {
            return Vec::new();
        }
        let rollback = self.snapshot();

        if let Some(winner) = self.session.winner() {
            info!(winner = winner + 1, scores = ?self.session.scores, "game won");
            let prompt = Prompt::GameWon { winner };
            self.status = FlowStatus::AwaitingAcknowledgment(prompt.clone());
            return vec![Effect::Prompt(prompt)];
        }

        let mut effects = Vec::new();
        if self.round.sequencer.observe_hands(&self.session.hands) {
            info!("both hands exhausted; round moves to show");
            self.session.phase = Phase::Show;
            self.round.play_area.clear();
            effects.push(Effect::Notice(Notice::RoundExhausted));
        }

        match self.round.sequencer.stage() {
            RoundStage::Showing => match self.round.reveal {
                RevealState::NotRequested => {
                    self.round.reveal = RevealState::Requested;
                    effects.push(self.issue(
                        AuthorityRequest::ShowScore,
                        Intent::RoundReveal,
                        rollback,
                    ));
                }
                RevealState::Revealed => {
                    effects.push(self.issue(
                        AuthorityRequest::StartNewRound,
                        Intent::NewRound,
                        rollback,
                    ));
                }
                RevealState::Requested => {}
            },
            RoundStage::Playing if !self.round.turn_settled => {
                if let Some(outcome) = turn_outcome(&self.session) {
                    let intent = match outcome {
                        TurnOutcome::Go => {
                            info!(running_sum = self.session.running_sum, "go; running sum reset");
                            self.session.running_sum = 0;
                            effects.push(Effect::Notice(Notice::NoLegalMoves));
                            Intent::Go
                        }
                        TurnOutcome::TurnCompleted => {
                            info!("turn completed; refreshing scores");
                            effects.push(Effect::Notice(Notice::TurnCompleted));
                            Intent::TurnCompleted
                        }
                    };
                    effects.push(self.issue(AuthorityRequest::ShowScore, intent, rollback));
                }
            }
            RoundStage::CollectingCrib | RoundStage::Playing => {}
        }
        effects
    }
}
