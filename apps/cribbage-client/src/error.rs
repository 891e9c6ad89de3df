use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::sync::SyncError;

/// Application-level error surfaced to the player.
///
/// Every variant is shown through a blocking acknowledgment so both players
/// stay in step with the authority; none of them is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network failure: {detail}")]
    NetworkFailure { detail: String },
    #[error("Authority rejected request ({status}): {detail}")]
    AuthorityRejected { status: u16, detail: String },
    #[error("Request cancelled")]
    Cancelled,
    #[error("Invalid reply: {detail}")]
    InvalidReply { detail: String },
    #[error("Phase mismatch: {detail}")]
    PhaseMismatch { detail: String },
    #[error("Illegal move: {detail}")]
    IllegalMove { detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Unexpected reply: {detail}")]
    UnexpectedReply { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl ClientError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::NetworkFailure { .. } => ErrorCode::NetworkFailure,
            ClientError::AuthorityRejected { .. } => ErrorCode::AuthorityRejected,
            ClientError::Cancelled => ErrorCode::RequestCancelled,
            ClientError::InvalidReply { .. } => ErrorCode::InvalidReply,
            ClientError::PhaseMismatch { .. } => ErrorCode::PhaseMismatch,
            ClientError::IllegalMove { .. } => ErrorCode::IllegalMove,
            ClientError::Validation { code, .. } => *code,
            ClientError::UnexpectedReply { .. } => ErrorCode::UnexpectedReply,
            ClientError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ClientError::NetworkFailure { detail } => detail.clone(),
            ClientError::AuthorityRejected { detail, .. } => detail.clone(),
            ClientError::Cancelled => "Request cancelled by a newer action".to_string(),
            ClientError::InvalidReply { detail } => detail.clone(),
            ClientError::PhaseMismatch { detail } => detail.clone(),
            ClientError::IllegalMove { detail } => detail.clone(),
            ClientError::Validation { detail, .. } => detail.clone(),
            ClientError::UnexpectedReply { detail } => detail.clone(),
            ClientError::Config { detail } => detail.clone(),
        }
    }

    /// True for failures of the round trip itself (the taxonomy's NetworkFailure).
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            ClientError::NetworkFailure { .. }
                | ClientError::AuthorityRejected { .. }
                | ClientError::Cancelled
                | ClientError::InvalidReply { .. }
        )
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure {
            detail: detail.into(),
        }
    }

    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::PhaseMismatch {
            detail: detail.into(),
        }
    }

    pub fn illegal_move(detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn unexpected_reply(detail: impl Into<String>) -> Self {
        Self::UnexpectedReply {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => match kind {
                ValidationKind::PhaseMismatch => ClientError::PhaseMismatch { detail },
                ValidationKind::CardNotPlayable => ClientError::IllegalMove { detail },
                ValidationKind::CardNotInHand => ClientError::invalid(ErrorCode::CardNotInHand, detail),
                ValidationKind::RequestInFlight => {
                    ClientError::invalid(ErrorCode::RequestInFlight, detail)
                }
                ValidationKind::InvalidPlayer => ClientError::invalid(ErrorCode::InvalidPlayer, detail),
                ValidationKind::InvalidRank
                | ValidationKind::InvalidSuit
                | ValidationKind::ParseCard => ClientError::invalid(ErrorCode::ParseCard, detail),
                ValidationKind::Other(_) => ClientError::invalid(ErrorCode::ValidationError, detail),
            },
        }
    }
}

impl From<SyncError> for ClientError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Rejected { status, body } => ClientError::AuthorityRejected {
                status: status.as_u16(),
                detail: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            },
            SyncError::InvalidReply(detail) => ClientError::InvalidReply { detail },
            SyncError::InvalidUrl(detail) => ClientError::Config { detail },
            SyncError::InvalidScheme(scheme) => ClientError::Config {
                detail: format!("invalid URL scheme: {scheme} (expected http or https)"),
            },
            SyncError::Reqwest(e) => ClientError::NetworkFailure {
                detail: e.to_string(),
            },
        }
    }
}
