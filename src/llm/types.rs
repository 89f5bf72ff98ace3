//! Wire types for the Bedrock runtime invoke endpoint (Anthropic messages
//! shape).

use serde::{Deserialize, Serialize};

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const MAX_TOKENS: u32 = 2500;

/// Deterministic output: payout math should not vary between runs.
pub const TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone, Serialize)]
pub struct InvokeModelRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

impl InvokeModelRequest {
    /// A single-turn user request with the crate's fixed generation
    /// settings.
    pub fn single_user_message(prompt: impl Into<String>) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.into(),
            }],
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvokeModelResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl InvokeModelResponse {
    /// The first text block of the completion, if the model returned one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_fixed_generation_settings() {
        let request = InvokeModelRequest::single_user_message("hello");
        assert_eq!(request.anthropic_version, ANTHROPIC_VERSION);
        assert_eq!(request.max_tokens, MAX_TOKENS);
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
    }

    #[test]
    fn response_first_text_skips_non_text_blocks() {
        let body = r#"{"content": [{"type": "tool_use", "id": "x"}, {"type": "text", "text": "answer"}]}"#;
        let response: InvokeModelResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("answer"));
    }

    #[test]
    fn empty_content_has_no_text() {
        let response: InvokeModelResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }
}
