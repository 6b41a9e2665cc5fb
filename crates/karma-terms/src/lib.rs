//! # karma-terms
//!
//! [`Term`] is a transient view over one term's persisted state; nothing is
//! cached between calls. [`CooldownGate`] rate-limits modifications per user
//! and term.

pub mod cooldown;
pub mod term;

pub use cooldown::CooldownGate;
pub use term::Term;
