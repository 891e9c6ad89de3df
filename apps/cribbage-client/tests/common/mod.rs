#![allow(dead_code)]


use std::time::Duration;

use cribbage_client::{AuthorityConfig, HttpAuthority, RetryPolicy};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

/// Retries without waiting, so retry tests stay fast.
pub fn instant_retries(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_backoff: Duration::ZERO,
        max_backoff: Duration::ZERO,
    }
}

pub fn http_authority(base_url: &str, retry: RetryPolicy) -> HttpAuthority {
    let config = AuthorityConfig {
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(2),
        retry,
    };
    HttpAuthority::new(&config).expect("stub url is valid")
}
