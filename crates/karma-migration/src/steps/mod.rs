//! The individual upgrade steps.

pub mod decay_actions;
pub mod reverse_links;
pub mod weighted_modifiers;

use std::fmt;

/// Identifies one upgrade step and its completion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationStep {
    /// Add `karma:linked_by:*` entries for every existing forward link.
    ReverseLinks,
    /// Convert `karma:users:*` membership sets into weighted counts.
    WeightedModifiers,
    /// Synthesize action history for scores that predate decay tracking.
    DecayActions,
}

impl MigrationStep {
    pub const ALL: [MigrationStep; 3] = [
        MigrationStep::ReverseLinks,
        MigrationStep::WeightedModifiers,
        MigrationStep::DecayActions,
    ];

    /// Member stored in `karma:migrations` once the step completes.
    pub fn marker(self) -> &'static str {
        match self {
            Self::ReverseLinks => "reverse_links",
            Self::WeightedModifiers => "weighted_modifiers",
            Self::DecayActions => "decay_actions",
        }
    }
}

impl fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}
