use serde::{Deserialize, Serialize};

/// Body of a question sent to the assistant service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

pub mod client;

pub use client::{AskError, AssistantBackend, HttpAssistant};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_session_field() {
        let request = AskRequest {
            prompt: "Hello".to_string(),
            session_id: "abc-123".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "prompt": "Hello", "sessionId": "abc-123" })
        );
    }

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"response":"Hi there","sources":[]}"#).unwrap();
        assert_eq!(parsed.response, "Hi there");
    }

    #[test]
    fn response_without_reply_field_is_rejected() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer":"Hi"}"#).is_err());
    }
}
