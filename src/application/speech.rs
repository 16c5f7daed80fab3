//! Speech Synthesizer
//!
//! Wraps the speech engine with the service's fixed voice parameters. The
//! caller controls only the text; voice, locale, encoding, rate and pitch
//! come from configuration and are never exposed on the HTTP surface.

use std::sync::Arc;

use super::error::RelayError;
use super::ports::{SpeechEnginePort, SynthesisRequest, VoiceParams};

/// Speech synthesis parameters
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub language_code: String,
    pub voice: String,
    pub audio_encoding: String,
    pub speaking_rate: f64,
    pub pitch: f64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language_code: "ko-KR".to_string(),
            voice: "ko-KR-Neural2-A".to_string(),
            audio_encoding: "MP3".to_string(),
            speaking_rate: 1.0,
            pitch: 0.0,
        }
    }
}

/// Speech Synthesizer
///
/// Holds an immutable engine handle; safe to share across requests.
pub struct SpeechSynthesizer {
    engine: Arc<dyn SpeechEnginePort>,
    config: SpeechConfig,
}

impl SpeechSynthesizer {
    pub fn new(engine: Arc<dyn SpeechEnginePort>, config: SpeechConfig) -> Self {
        Self { engine, config }
    }

    /// Synthesize `text` into audio bytes.
    ///
    /// The text is forwarded uninspected; empty input is the provider's
    /// problem, not ours.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, RelayError> {
        let request = self.build_request(text);

        tracing::debug!(
            voice = %request.voice.voice_name,
            text_len = text.len(),
            "Sending speech synthesis request"
        );

        self.engine
            .synthesize(request)
            .await
            .map_err(RelayError::Synthesis)
    }

    fn build_request(&self, text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            voice: VoiceParams {
                language_code: self.config.language_code.clone(),
                voice_name: self.config.voice.clone(),
                audio_encoding: self.config.audio_encoding.clone(),
                speaking_rate: self.config.speaking_rate,
                pitch: self.config.pitch,
            },
        }
    }
}
