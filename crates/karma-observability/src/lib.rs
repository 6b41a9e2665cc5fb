//! # karma-observability
//!
//! Subscriber initialisation and span helpers for processes hosting the
//! karma engine. Library crates only emit `tracing` events; installing a
//! subscriber is left to the host.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV};
