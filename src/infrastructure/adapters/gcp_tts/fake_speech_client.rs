//! Fake Speech Client - deterministic speech engine for tests
//!
//! Returns fixed audio bytes or an injected failure; never calls out.

use async_trait::async_trait;

use crate::application::ports::{SpeechEnginePort, SpeechError, SynthesisRequest};

#[derive(Debug, Clone)]
enum FakeBehavior {
    Audio(Vec<u8>),
    Fail(String),
}

/// Fake Speech Client
#[derive(Debug, Clone)]
pub struct FakeSpeechClient {
    behavior: FakeBehavior,
}

impl FakeSpeechClient {
    /// Always return `audio`.
    pub fn with_audio(audio: Vec<u8>) -> Self {
        Self {
            behavior: FakeBehavior::Audio(audio),
        }
    }

    /// Always fail with a service error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: FakeBehavior::Fail(message.into()),
        }
    }
}

impl Default for FakeSpeechClient {
    fn default() -> Self {
        // Two bytes of MP3 frame sync followed by padding
        Self::with_audio(vec![0xFF, 0xFB, 0x90, 0x00])
    }
}

#[async_trait]
impl SpeechEnginePort for FakeSpeechClient {
    async fn synthesize(&self, _request: SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
        match &self.behavior {
            FakeBehavior::Audio(audio) => Ok(audio.clone()),
            FakeBehavior::Fail(message) => Err(SpeechError::ServiceError(message.clone())),
        }
    }
}
