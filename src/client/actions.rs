use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three action types of a request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsyncActionType {
    pub request: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

pub const FETCH_ARTICLES: AsyncActionType = AsyncActionType {
    request: "FETCH_ARTICLES_REQUEST",
    success: "FETCH_ARTICLES_SUCCESS",
    failure: "FETCH_ARTICLES_FAILURE",
};

/// A dispatched state change, serialized as `{ "type", "payload", "error" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Action {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
            error: None,
        }
    }

    pub fn with_payload(action_type: impl Into<String>, payload: Value) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(action_type)
        }
    }

    pub fn failure(action_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(action_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_serializes_with_type_key() {
        let action = Action::with_payload(FETCH_ARTICLES.success, json!({}));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({ "type": "FETCH_ARTICLES_SUCCESS", "payload": {} }));
    }

    #[test]
    fn failure_carries_error_only() {
        let value = serde_json::to_value(Action::failure(FETCH_ARTICLES.failure, "boom")).unwrap();
        assert_eq!(value, json!({ "type": "FETCH_ARTICLES_FAILURE", "error": "boom" }));
    }
}
