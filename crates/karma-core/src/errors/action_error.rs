/// Errors encoding or decoding stored action tokens.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("malformed action token {token:?}: {reason}")]
    MalformedToken { token: String, reason: String },

    #[error("failed to encode action for term {term}: {reason}")]
    EncodeFailed { term: String, reason: String },
}
