//! Domain-level error type used by the table logic.
//!
//! This error type is transport-agnostic. Callers that surface errors to the
//! player should convert into `crate::error::ClientError` using the provided
//! `From<DomainError> for ClientError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for rule and input violations detected locally.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A card was selected while nothing accepts cards.
    PhaseMismatch,
    /// The selected card is not in the selecting player's hand.
    CardNotInHand,
    /// The selected card would push the running sum past the cap.
    CardNotPlayable,
    /// A request is already outstanding.
    RequestInFlight,
    /// Player index outside 0..=1.
    InvalidPlayer,
    /// Rank outside 1..=13.
    InvalidRank,
    /// Suit outside 0..=3.
    InvalidSuit,
    /// Card token could not be parsed.
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
}
