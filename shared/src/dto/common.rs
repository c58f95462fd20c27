use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the API: `{ "detail": ... }`.
///
/// `detail` is a plain string for handled errors and a list of
/// `{ "loc": [...], "msg": "..." }` entries for request validation failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(entries) => {
                let msgs: Vec<&str> = entries
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

/// Root status probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub system: String,
}

impl ApiStatus {
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_detail() {
        let err: ErrorResponse = serde_json::from_str(r#"{"detail": "Invalid credentials"}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn validation_detail_list() {
        let body = r#"{"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
            {"loc": ["body", "password"], "msg": "ensure this value has at least 8 characters", "type": "value_error"}
        ]}"#;
        let err: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            err.message().as_deref(),
            Some("value is not a valid email address; ensure this value has at least 8 characters")
        );
    }

    #[test]
    fn missing_detail() {
        let err: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(err.message(), None);
    }
}
