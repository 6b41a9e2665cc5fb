/// One user's share of the modifications made to a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub user_id: String,
    /// Resolved display name, or the raw id when the directory has none.
    pub name: String,
    pub count: i64,
}
