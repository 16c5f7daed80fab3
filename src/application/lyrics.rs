//! Lyrics Generator
//!
//! Builds the fixed lyricist prompt pair around a caller-supplied topic and
//! forwards it to the chat-completion provider. The topic is not validated;
//! an empty topic is interpolated as-is and left to the provider.

use std::sync::Arc;

use super::error::RelayError;
use super::ports::{ChatEnginePort, ChatMessage, CompletionRequest};

/// Persona directive sent as the system message.
const SYSTEM_PROMPT: &str =
    "당신은 감성적인 한국어 작사가입니다. 주어진 주제에 따라 감정을 담은 2절짜리 노래 가사를 만들어주세요.";

/// Lyrics generation parameters
#[derive(Debug, Clone)]
pub struct LyricsConfig {
    pub model: String,
    /// High by default: creative variance is preferred over determinism.
    /// `f64` so the wire value is exactly what the config says.
    pub temperature: f64,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.9,
        }
    }
}

/// Lyrics Generator
///
/// Holds an immutable engine handle; safe to share across requests.
pub struct LyricsGenerator {
    engine: Arc<dyn ChatEnginePort>,
    config: LyricsConfig,
}

impl LyricsGenerator {
    pub fn new(engine: Arc<dyn ChatEnginePort>, config: LyricsConfig) -> Self {
        Self { engine, config }
    }

    /// Generate Korean lyrics for `topic`.
    ///
    /// Returns the first completion's text unmodified.
    pub async fn generate(&self, topic: &str) -> Result<String, RelayError> {
        let request = self.build_request(topic);

        tracing::debug!(
            model = %request.model,
            topic_len = topic.len(),
            "Sending lyrics completion request"
        );

        self.engine
            .complete(request)
            .await
            .map_err(RelayError::Generation)
    }

    fn build_request(&self, topic: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!(
                    "\"{}\" 주제로 [Verse], [Chorus] 형식을 포함해 가사를 한국어로 써줘",
                    topic
                )),
            ],
            temperature: self.config.temperature,
        }
    }
}
