#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod sync;


// Re-exports for public API
pub use config::{AuthorityConfig, ClientConfig, LogFormat};
pub use domain::{Card, CountingRule, Phase, PlayerId, SessionState};
pub use error::ClientError;
pub use errors::ErrorCode;
pub use services::{Effect, Event, FlowStatus, GameFlow, Notice, Prompt, SessionDriver};
pub use sync::{Authority, AuthorityRequest, HttpAuthority, RetryPolicy, SyncError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
