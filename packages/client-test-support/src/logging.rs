//! Tracing for the cribbage client's test binaries.
//!
//! The library's unit tests reach this through `test_bootstrap`, and
//! `tests/common` installs it from a `ctor` hook, so `http_authority_test`,
//! `session_driver_test` and `flow_props` all log through one subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Fallback when neither `TEST_LOG` nor `RUST_LOG` is set. Retry warnings
/// from `HttpAuthority` still show.
const DEFAULT_FILTER: &str = "warn";

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the test-writer subscriber on first call; later calls are no-ops.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
