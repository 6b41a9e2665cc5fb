//! # karma-commands
//!
//! Turns chat text into a [`Command`], runs it against the scoring engine,
//! and renders plain-text replies.

pub mod command;
pub mod dispatcher;
pub mod parser;
pub mod replies;

pub use command::Command;
pub use dispatcher::{Dispatcher, Invocation};
pub use parser::CommandParser;
