//! Span constructors for the host loop.

/// Span covering one chat message from parse to reply.
#[macro_export]
macro_rules! message_span {
    ($user:expr) => {
        tracing::info_span!("karma.message", user = %$user)
    };
}

/// Span covering service startup: store open and data migrations.
#[macro_export]
macro_rules! startup_span {
    ($db_path:expr) => {
        tracing::info_span!("karma.startup", db_path = %$db_path)
    };
}
