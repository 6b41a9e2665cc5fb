//! # karma-migration
//!
//! Upgrades data written by older versions of the plugin. Each step only
//! adds missing data or converts representations, records a marker in
//! `karma:migrations` when done, and is skipped once the marker exists.

pub mod runner;
pub mod steps;

pub use runner::{MigrationReport, MigrationRunner};
pub use steps::MigrationStep;
