//! norae - Korean lyrics and speech relay
//!
//! A thin HTTP relay in front of two external providers:
//! - POST /generate-lyrics: topic in, OpenAI-generated Korean lyrics out
//! - POST /tts: text in, Google Cloud TTS MP3 bytes out
//!
//! Layers:
//! - Application: ports (ChatEnginePort, SpeechEnginePort) and the two
//!   services (LyricsGenerator, SpeechSynthesizer)
//! - Infrastructure: HTTP router/server plus the OpenAI and GCP adapters
//!   (with fakes for tests)
//! - Config: layered defaults / config file / environment

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
