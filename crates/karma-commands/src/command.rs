use karma_core::SortOrder;

/// A parsed chat command.
///
/// Terms are carried as typed; normalization happens when the dispatcher
/// builds a [`Term`](karma_terms::Term). `None` means the keyword was given
/// without a usable term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `karma delete TERM`
    Delete(Option<String>),
    /// `karma modified TERM`
    Modified(Option<String>),
    /// `karma`, `karma best N`, `karma worst N`
    List { order: SortOrder, limit: usize },
    /// `TERM1 += TERM2`
    Link { term: String, other: String },
    /// `TERM1 -= TERM2`
    Unlink { term: String, other: String },
    /// `TERM~~`
    Check(String),
    /// One or more `TERM++` / `TERM--` tokens, in message order.
    Modify(Vec<(String, i64)>),
}
