/// Result of linking one term into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    AlreadyLinked,
    /// The linked term's own score is below the configured threshold.
    BelowThreshold(i64),
    /// A term cannot be linked into itself.
    SelfLink,
}
