//! Error codes for the cribbage client.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the player sees next to
//! the error message.

use core::fmt;

/// Centralized error codes for the cribbage client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Transport
    /// Authority unreachable or transport failure
    NetworkFailure,
    /// Authority answered with a non-success status
    AuthorityRejected,
    /// Request aborted by a later user action
    RequestCancelled,
    /// Reply did not match the expected shape
    InvalidReply,

    // Table rules
    /// Card selected outside its accepting phase
    PhaseMismatch,
    /// Card refused by the authority or by the running-sum cap
    IllegalMove,
    /// Card not in the selecting player's hand
    CardNotInHand,
    /// A request is already outstanding
    RequestInFlight,
    /// Player index out of range
    InvalidPlayer,
    /// Card token could not be parsed
    ParseCard,
    /// General validation error
    ValidationError,

    // Local faults
    /// Reply or failure arrived with no outstanding request
    UnexpectedReply,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkFailure => "NETWORK_FAILURE",
            Self::AuthorityRejected => "AUTHORITY_REJECTED",
            Self::RequestCancelled => "REQUEST_CANCELLED",
            Self::InvalidReply => "INVALID_REPLY",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::RequestInFlight => "REQUEST_IN_FLIGHT",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UnexpectedReply => "UNEXPECTED_REPLY",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
