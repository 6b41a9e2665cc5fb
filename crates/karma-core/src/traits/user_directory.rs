/// Resolves opaque user ids to display names.
pub trait IUserDirectory: Send + Sync {
    /// `None` when the id is unknown; callers fall back to the raw id.
    fn display_name(&self, user_id: &str) -> Option<String>;
}

/// Directory that knows nobody, so every id is shown as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDirectory;

impl IUserDirectory for PassthroughDirectory {
    fn display_name(&self, _user_id: &str) -> Option<String> {
        None
    }
}
