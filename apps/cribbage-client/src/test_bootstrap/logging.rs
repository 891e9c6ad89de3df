#![cfg(test)]

//! Unit tests share the integration tests' subscriber setup, so `TEST_LOG`
//! and `RUST_LOG` behave the same in both.

pub fn init() {
    client_test_support::logging::init();
}
