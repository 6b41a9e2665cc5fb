//! SQL for each key kind.

pub mod expiring_ops;
pub mod key_ops;
pub mod set_ops;
pub mod sorted_set_ops;
