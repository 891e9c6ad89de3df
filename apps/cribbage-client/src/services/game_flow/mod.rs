//! Turn/phase synchronisation: one owned state value and one dispatch function.
//!
//! `GameFlow::dispatch` consumes an `Event`, mutates the session and round
//! bookkeeping, and returns `Effect`s for the driver to carry out. It never
//! performs I/O. At most one authority request is outstanding at a time, and
//! every local change made ahead of a request is rolled back if it fails.

mod orchestration;
mod player_actions;
mod replies;

#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod tests_orchestration;

pub use orchestration::{turn_outcome, TurnOutcome};

use crate::domain::{
    evaluate_hands, Card, CountingRule, Destination, Playability, PlayerId, RoundProgress,
    SessionState,
};
use crate::error::ClientError;
use crate::sync::AuthorityRequest;

/// Everything that can happen to the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CardSelected { who: PlayerId, card: Card },
    ReplyReceived(SessionState),
    NetworkError(ClientError),
    Acknowledge,
    Cancel,
    NewGameRequested,
    RefreshRequested,
}

/// What the caller must do after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(AuthorityRequest),
    Prompt(Prompt),
    Notice(Notice),
}

/// Blocking question; play stays frozen until it is acknowledged or cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Accepting starts a new game; declining halts the table.
    GameWon { winner: PlayerId },
    Failure(ClientError),
}

/// Informational; needs no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CollectCrib { required: u8 },
    PlayBegins,
    TurnCompleted,
    NoLegalMoves,
    RoundExhausted,
    ScoresRevealed,
    GameDeclined,
    RequestCancelled,
}

/// Why a request was issued; decides how its reply is folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Load,
    NewGame,
    NewRound,
    TurnCompleted,
    Go,
    RoundReveal,
    Submit {
        who: PlayerId,
        destination: Destination,
    },
}

/// State to restore if the request fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub session: SessionState,
    pub round: RoundProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub request: AuthorityRequest,
    pub intent: Intent,
    pub rollback: Snapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStatus {
    Ready,
    AwaitingReply(Box<Pending>),
    AwaitingAcknowledgment(Prompt),
    /// A finished game was not continued; only a new game or refresh moves on.
    Halted,
}

#[derive(Debug, Clone)]
pub struct GameFlow {
    session: SessionState,
    round: RoundProgress,
    status: FlowStatus,
    counting: CountingRule,
}

impl GameFlow {
    pub fn new(counting: CountingRule) -> Self {
        Self {
            session: SessionState::zeroed(),
            round: RoundProgress::new_game(),
            status: FlowStatus::Ready,
            counting,
        }
    }

    /// Initial load of whatever game the authority is holding.
    pub fn start(&mut self) -> Result<Vec<Effect>, ClientError> {
        self.dispatch(Event::RefreshRequested)
    }

    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Effect>, ClientError> {
        match event {
            Event::CardSelected { who, card } => self.select_card(who, card),
            Event::ReplyReceived(state) => self.reply_received(state),
            Event::NetworkError(err) => self.request_failed(err),
            Event::Acknowledge => self.acknowledge(),
            Event::Cancel => self.cancel(),
            Event::NewGameRequested => self.request_new_game(),
            Event::RefreshRequested => self.refresh(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn round(&self) -> &RoundProgress {
        &self.round
    }

    pub fn status(&self) -> &FlowStatus {
        &self.status
    }

    pub fn counting(&self) -> CountingRule {
        self.counting
    }

    pub fn pending_request(&self) -> Option<&AuthorityRequest> {
        match &self.status {
            FlowStatus::AwaitingReply(p) => Some(&p.request),
            _ => None,
        }
    }

    /// Sum the next card is counted against. After a settled go the
    /// authority keeps reporting the old sum until a card is played, while
    /// play itself restarts from zero.
    pub fn running_sum_in_play(&self) -> u8 {
        if self.round.turn_settled && self.session.nobody_has_legal_move() {
            0
        } else {
            self.session.running_sum
        }
    }

    /// Per-card playability for rendering.
    pub fn playability(&self) -> Playability {
        evaluate_hands(&self.session.hands, self.running_sum_in_play(), self.counting)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.clone(),
            round: self.round.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.session = snapshot.session;
        self.round = snapshot.round;
    }

    fn issue(&mut self, request: AuthorityRequest, intent: Intent, rollback: Snapshot) -> Effect {
        tracing::debug!(%request, ?intent, "issuing authority request");
        self.status = FlowStatus::AwaitingReply(Box::new(Pending {
            request,
            intent,
            rollback,
        }));
        Effect::Request(request)
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new(CountingRule::default())
    }
}
