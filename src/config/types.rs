//! Configuration Types
//!
//! All request parameters that the original service hardcoded (model name,
//! temperature, voice, encoding, speaking rate, pitch) live here as named
//! fields with documented defaults, so tests and deployments can substitute
//! them without touching the call sites.

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default)]
    pub log: LogSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// OpenAI chat-completion settings
///
/// `api_key` has no default and is not validated at startup; a missing key
/// surfaces as a failed provider call on the first request.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.9,
            timeout_secs: 120,
        }
    }
}

/// Google Cloud Text-to-Speech settings
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    /// Service account credentials file
    pub credentials_path: String,
    pub endpoint: String,
    pub language_code: String,
    pub voice: String,
    pub audio_encoding: String,
    pub speaking_rate: f64,
    pub pitch: f64,
    pub timeout_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            credentials_path: "./credentials.json".to_string(),
            endpoint: "https://texttospeech.googleapis.com/v1/text:synthesize".to_string(),
            language_code: "ko-KR".to_string(),
            voice: "ko-KR-Neural2-A".to_string(),
            audio_encoding: "MP3".to_string(),
            speaking_rate: 1.0,
            pitch: 0.0,
            timeout_secs: 120,
        }
    }
}

/// Log settings
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
