pub mod client;

pub use client::{AuthorityConfig, ClientConfig, LogFormat};
