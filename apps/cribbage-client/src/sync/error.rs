use thiserror::Error;

/// Transport-level failure talking to the authority.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("rejected: {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid reply: {0}")]
    InvalidReply(String),
    #[error("URL parse error: {0}")]
    InvalidUrl(String),
    #[error("invalid URL scheme: {0} (expected http or https)")]
    InvalidScheme(String),
}

impl SyncError {
    /// Whether another attempt may succeed. Only connection failures are
    /// safe to repeat for state-changing requests; the request never
    /// reached the authority.
    pub fn is_transient(&self, idempotent: bool) -> bool {
        match self {
            SyncError::Reqwest(e) if e.is_connect() => true,
            SyncError::Reqwest(e) => idempotent && e.is_timeout(),
            SyncError::Rejected { status, .. } => idempotent && status.is_server_error(),
            SyncError::InvalidReply(_) | SyncError::InvalidUrl(_) | SyncError::InvalidScheme(_) => {
                false
            }
        }
    }
}
