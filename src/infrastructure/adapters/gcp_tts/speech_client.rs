//! GCP Speech Client
//!
//! Implements `SpeechEnginePort` against the Cloud Text-to-Speech REST API.
//! Authenticates with a service-account credentials file through `gcp_auth`;
//! the bearer token is fetched lazily on first use and refreshed when it
//! expires, so a missing credentials file only surfaces on the first
//! synthesis request.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use gcp_auth::Token;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::RwLock;

use super::types::{
    AudioConfig, SynthesisInput, SynthesizeRequest, SynthesizeResponse, VoiceSelectionParams,
};
use crate::application::ports::{SpeechEnginePort, SpeechError, SynthesisRequest};

const SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

/// GCP speech client configuration
#[derive(Debug, Clone)]
pub struct GcpSpeechClientConfig {
    /// Service account credentials file
    pub credentials_path: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GcpSpeechClientConfig {
    fn default() -> Self {
        Self {
            credentials_path: "./credentials.json".to_string(),
            endpoint: "https://texttospeech.googleapis.com/v1/text:synthesize".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GcpSpeechClientConfig {
    pub fn new(credentials_path: impl Into<String>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            ..Default::default()
        }
    }
}

/// GCP Speech Client
pub struct GcpSpeechClient {
    client: Client,
    config: GcpSpeechClientConfig,
    token: RwLock<Option<Token>>,
}

impl GcpSpeechClient {
    pub fn new(config: GcpSpeechClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            token: RwLock::new(None),
        })
    }

    /// Current bearer token, fetching or refreshing it when needed.
    async fn bearer_token(&self) -> Result<String, SpeechError> {
        {
            let token = self.token.read().await;
            if let Some(token) = token.as_ref() {
                if !token.has_expired() {
                    return Ok(token.as_str().to_string());
                }
            }
        }

        let mut token = self.token.write().await;
        // Another request may have refreshed while we waited for the lock
        if token.as_ref().map_or(true, Token::has_expired) {
            *token = Some(fetch_token(&self.config.credentials_path).await?);
        }

        token
            .as_ref()
            .map(|t| t.as_str().to_string())
            .ok_or_else(|| SpeechError::AuthError("token unavailable".to_string()))
    }
}

async fn fetch_token(credentials_path: &str) -> Result<Token, SpeechError> {
    let authenticator = gcp_auth::from_credentials_file(credentials_path.to_string())
        .await
        .map_err(|e| SpeechError::AuthError(e.to_string()))?;

    authenticator
        .get_token(SCOPES)
        .await
        .map_err(|e| SpeechError::AuthError(e.to_string()))
}

#[async_trait]
impl SpeechEnginePort for GcpSpeechClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
        let token = self.bearer_token().await?;

        let body = SynthesizeRequest {
            input: SynthesisInput { text: request.text },
            voice: VoiceSelectionParams {
                language_code: request.voice.language_code,
                name: request.voice.voice_name,
            },
            audio_config: AudioConfig {
                audio_encoding: request.voice.audio_encoding,
                speaking_rate: request.voice.speaking_rate,
                pitch: request.voice.pitch,
            },
        };

        tracing::debug!(
            url = %self.config.endpoint,
            voice = %body.voice.name,
            "Sending synthesize request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let audio = BASE64
            .decode(parsed.audio_content)
            .map_err(|e| SpeechError::InvalidResponse(format!("invalid audio content: {}", e)))?;

        tracing::info!(audio_size = audio.len(), "Speech synthesis completed");

        Ok(audio)
    }
}
