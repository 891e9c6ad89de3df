//! Cribbage client test support
//!
//! Shared helpers for the client's integration tests: unified logging
//! initialization and builders for authority reply documents.

pub mod logging;
pub mod replies;

pub use replies::{wire_card, ReplyBuilder};
