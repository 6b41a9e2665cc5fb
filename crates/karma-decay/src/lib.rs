//! # karma-decay
//!
//! Every score change made while decay is enabled is recorded as an
//! [`Action`](karma_core::Action). Once an action is older than the decay
//! interval, [`DecayEngine::run`] undoes its effect on the term's own score
//! and on the acting user's modifier count, then forgets it.

pub mod action_log;
pub mod engine;

pub use action_log::ActionLog;
pub use engine::{DecayEngine, DecayReport};
