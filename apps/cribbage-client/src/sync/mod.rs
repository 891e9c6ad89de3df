//! Remote sync: round trips to the authority.
//!
//! Every successful call yields a complete `SessionState`; there is no
//! partial result. Callers keep their prior state on any error.

pub mod error;
pub mod http;
pub mod retry;

use std::fmt;

use async_trait::async_trait;

pub use error::SyncError;
pub use http::HttpAuthority;
pub use retry::RetryPolicy;

use crate::domain::{Card, Phase, SessionState};

/// One request the client can make of the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityRequest {
    FetchCurrentGame,
    StartNewGame,
    StartNewRound,
    ShowScore,
    PlayCard { card: Card, phase: Phase },
}

impl AuthorityRequest {
    /// Safe to repeat after a timeout or server error.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, AuthorityRequest::FetchCurrentGame)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthorityRequest::FetchCurrentGame => "current-game",
            AuthorityRequest::StartNewGame => "start-new-game",
            AuthorityRequest::StartNewRound => "start-new-round",
            AuthorityRequest::ShowScore => "show-score",
            AuthorityRequest::PlayCard { .. } => "play-card",
        }
    }
}

impl fmt::Display for AuthorityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorityRequest::PlayCard { card, phase } => {
                write!(f, "play-card {card} ({})", phase.as_wire())
            }
            other => f.write_str(other.name()),
        }
    }
}

/// The scoring and legality service.
#[async_trait]
pub trait Authority: Send + Sync {
    async fn fetch_current_game(&self) -> Result<SessionState, SyncError>;

    async fn start_new_game(&self) -> Result<SessionState, SyncError>;

    async fn start_new_round(&self) -> Result<SessionState, SyncError>;

    async fn show_score(&self) -> Result<SessionState, SyncError>;

    async fn submit_card(&self, card: Card, phase: Phase) -> Result<SessionState, SyncError>;

    async fn send(&self, request: &AuthorityRequest) -> Result<SessionState, SyncError> {
        match *request {
            AuthorityRequest::FetchCurrentGame => self.fetch_current_game().await,
            AuthorityRequest::StartNewGame => self.start_new_game().await,
            AuthorityRequest::StartNewRound => self.start_new_round().await,
            AuthorityRequest::ShowScore => self.show_score().await,
            AuthorityRequest::PlayCard { card, phase } => self.submit_card(card, phase).await,
        }
    }
}
