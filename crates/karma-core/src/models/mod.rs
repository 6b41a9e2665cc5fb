//! Plain data types shared across the workspace.

pub mod action;
pub mod cooldown_status;
pub mod link_outcome;
pub mod modifier;
pub mod sort_order;

pub use action::Action;
pub use cooldown_status::CooldownStatus;
pub use link_outcome::LinkOutcome;
pub use modifier::Modifier;
pub use sort_order::SortOrder;
