use cannonball_config::Settings;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// A two-turn request (system then user) using the settings' model and
    /// sampling options.
    pub fn new(settings: &Settings, system: &str, user: &str) -> Self {
        Self {
            model: settings.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`.
    pub role: String,
    /// Responses may carry `null` content (for instance on a refusal).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".into(),
            content: Some(content.into()),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".into(),
            content: Some(content.into()),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".into(),
            content: Some(content.into()),
        }
    }
}

/// The part of a chat-completion response this crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_carries_model_turns_and_sampling() {
        let settings = Settings {
            max_tokens: 50,
            temperature: 0.5,
            ..Settings::default()
        };
        let request = ChatRequest::new(&settings, "be brief", "hello");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "hello" },
                ],
                "max_tokens": 50,
                "temperature": 0.5,
            })
        );
    }

    #[test]
    fn response_ignores_unread_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "- [ ] pack" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 12 }
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices,
            vec![ChatChoice {
                message: ChatMessage::assistant("- [ ] pack")
            }]
        );
    }

    #[test]
    fn null_content_decodes_as_none() {
        let body = r#"{ "choices": [ { "message": { "role": "assistant", "content": null } } ] }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, None);
    }
}
