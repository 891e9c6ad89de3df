// Unit tests for error mapping - pure conversions without any transport
use reqwest::StatusCode;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::sync::SyncError;
use crate::{ClientError, ErrorCode};

#[test]
fn maps_phase_mismatch() {
    let de = DomainError::validation(ValidationKind::PhaseMismatch, "round is over");
    let err: ClientError = de.into();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
    assert_eq!(err.detail(), "round is over");
    assert!(!err.is_network_failure());
}

#[test]
fn maps_unplayable_card_to_illegal_move() {
    let de = DomainError::validation(ValidationKind::CardNotPlayable, "34 > 31");
    let err: ClientError = de.into();
    assert!(matches!(err, ClientError::IllegalMove { .. }));
    assert_eq!(err.code().as_str(), "ILLEGAL_MOVE");
}

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::CardNotInHand, ErrorCode::CardNotInHand),
        (ValidationKind::RequestInFlight, ErrorCode::RequestInFlight),
        (ValidationKind::InvalidPlayer, ErrorCode::InvalidPlayer),
        (ValidationKind::InvalidRank, ErrorCode::ParseCard),
        (ValidationKind::InvalidSuit, ErrorCode::ParseCard),
        (ValidationKind::ParseCard, ErrorCode::ParseCard),
        (
            ValidationKind::Other("whatever".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let err: ClientError = DomainError::validation(kind, "detail").into();
        assert_eq!(err.code(), code);
    }
}

#[test]
fn maps_rejected_status_and_body() {
    let err: ClientError = SyncError::Rejected {
        status: StatusCode::CONFLICT,
        body: "card already played".into(),
    }
    .into();
    assert_eq!(
        err,
        ClientError::AuthorityRejected {
            status: 409,
            detail: "card already played".into()
        }
    );
    assert!(err.is_network_failure());
}

#[test]
fn rejected_without_body_uses_status_text() {
    let err: ClientError = SyncError::Rejected {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: String::new(),
    }
    .into();
    assert_eq!(err.detail(), "500 Internal Server Error");
}

#[test]
fn maps_invalid_reply_and_config() {
    let err: ClientError = SyncError::InvalidReply("missing field `gameState`".into()).into();
    assert_eq!(err.code(), ErrorCode::InvalidReply);

    let err: ClientError = SyncError::InvalidScheme("ftp".into()).into();
    assert_eq!(err.code(), ErrorCode::ConfigError);
    assert!(err.detail().contains("ftp"));
}

#[test]
fn cancelled_is_a_network_failure() {
    let err = ClientError::Cancelled;
    assert_eq!(err.code(), ErrorCode::RequestCancelled);
    assert!(err.is_network_failure());
}
