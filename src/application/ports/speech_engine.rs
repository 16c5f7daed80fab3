//! Speech Engine Port - text-to-speech provider abstraction
//!
//! Concrete implementations live in infrastructure/adapters.

use async_trait::async_trait;
use thiserror::Error;

/// Speech synthesis error
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Voice and encoding parameters for one synthesis call
#[derive(Debug, Clone)]
pub struct VoiceParams {
    pub language_code: String,
    pub voice_name: String,
    pub audio_encoding: String,
    pub speaking_rate: f64,
    pub pitch: f64,
}

/// One synthesis request
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: VoiceParams,
}

/// Speech Engine Port
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    /// Synthesize `request.text` and return the raw audio bytes.
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, SpeechError>;
}
