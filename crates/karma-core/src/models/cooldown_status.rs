/// Result of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    /// The modification may proceed; a new cooldown has been started if enabled.
    Ready,
    /// The user must wait this many more seconds.
    OnCooldown(u64),
}

impl CooldownStatus {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
