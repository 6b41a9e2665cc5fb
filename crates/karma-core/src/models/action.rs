use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

/// One scoring event, kept so decay can reverse it later.
///
/// Stored as a compact JSON token, the member of the `karma:actions` sorted
/// set, scored by its unix timestamp. The `id` keeps two otherwise identical
/// events recorded in the same second distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(rename = "t")]
    pub term: String,
    #[serde(rename = "u", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(rename = "d")]
    pub delta: i64,
    #[serde(rename = "at", with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

impl Action {
    /// Create an action. The timestamp is truncated to whole seconds, the
    /// resolution it is stored at.
    pub fn new(term: &str, user: Option<&str>, delta: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            term: term.to_string(),
            user: user.map(str::to_string),
            delta,
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    /// Sorted-set score: unix seconds.
    pub fn score(&self) -> i64 {
        self.timestamp.timestamp()
    }

    pub fn to_token(&self) -> Result<String, ActionError> {
        serde_json::to_string(self).map_err(|e| ActionError::EncodeFailed {
            term: self.term.clone(),
            reason: e.to_string(),
        })
    }

    pub fn from_token(token: &str) -> Result<Self, ActionError> {
        serde_json::from_str(token).map_err(|e| ActionError::MalformedToken {
            token: token.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_compact() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let action = Action::new("foo", None, 1, at);
        let token = action.to_token().unwrap();
        assert!(token.contains(r#""t":"foo""#));
        assert!(token.contains(r#""at":1700000000"#));
        assert!(!token.contains(r#""u""#), "anonymous actions omit the user");
    }

    #[test]
    fn timestamp_is_truncated_to_seconds() {
        let at = DateTime::from_timestamp(1_700_000_000, 999_000_000).unwrap();
        let action = Action::new("foo", Some("alice"), -1, at);
        assert_eq!(action.timestamp.timestamp_subsec_nanos(), 0);
        assert_eq!(action.score(), 1_700_000_000);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = Action::from_token("foo|bar").unwrap_err();
        assert!(matches!(err, ActionError::MalformedToken { .. }));
    }

    #[test]
    fn same_event_twice_gets_distinct_tokens() {
        let at = Utc::now();
        let a = Action::new("foo", Some("alice"), 1, at).to_token().unwrap();
        let b = Action::new("foo", Some("alice"), 1, at).to_token().unwrap();
        assert_ne!(a, b);
    }
}
