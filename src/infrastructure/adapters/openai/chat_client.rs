//! OpenAI Chat Client
//!
//! Implements `ChatEnginePort` against the chat-completions REST API:
//!
//! POST {base_url}/v1/chat/completions
//! Request: {"model": "...", "messages": [...], "temperature": 0.9}
//! Response: {"choices": [{"message": {"content": "..."}}, ...]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatEnginePort, ChatError, ChatRole, CompletionRequest};

/// Chat-completion request body (wire format)
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    // f64 end-to-end: an f32 0.9 widens to 0.8999999761581421 in JSON
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat-completion response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireAssistantMessage,
}

#[derive(Debug, Deserialize)]
struct WireAssistantMessage {
    content: Option<String>,
}

/// OpenAI client configuration
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// OpenAI Chat Client
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.base_url)
    }
}

/// Extract the first choice's text from a parsed response.
fn first_choice_text(response: WireResponse) -> Result<String, ChatError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::InvalidResponse("response contains no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| ChatError::InvalidResponse("first choice has no content".to_string()))
}

fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::System => "system",
        ChatRole::User => "user",
    }
}

#[async_trait]
impl ChatEnginePort for OpenAiChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatError> {
        let body = WireRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: wire_role(m.role),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %request.model,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else if e.is_connect() {
                    ChatError::NetworkError(format!("Cannot connect to OpenAI: {}", e))
                } else {
                    ChatError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let content = first_choice_text(parsed)?;

        tracing::info!(content_len = content.len(), "Chat completion received");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ChatMessage;

    #[test]
    fn test_config_default() {
        let config = OpenAiChatClientConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = OpenAiChatClientConfig::new("sk-test").with_base_url("http://localhost:9900");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9900");
    }

    #[test]
    fn test_wire_request_serialization() {
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("persona"), ChatMessage::user("topic")],
            temperature: 0.9,
        };
        let body = WireRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: wire_role(m.role),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["temperature"], 0.9);
        // The wire value must be exactly 0.9, not a widened f32
        assert_eq!(value["temperature"].to_string(), "0.9");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "persona");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_first_choice_text_extracts_content() {
        let response: WireResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "[Verse]..."}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_text(response).unwrap(), "[Verse]...");
    }

    #[test]
    fn test_first_choice_text_rejects_empty_choices() {
        let response: WireResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            first_choice_text(response),
            Err(ChatError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_first_choice_text_rejects_missing_content() {
        let response: WireResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert!(matches!(
            first_choice_text(response),
            Err(ChatError::InvalidResponse(_))
        ));
    }
}
