//! Google Cloud Text-to-Speech adapters

mod fake_speech_client;
mod speech_client;
mod types;

pub use fake_speech_client::FakeSpeechClient;
pub use speech_client::{GcpSpeechClient, GcpSpeechClientConfig};
pub use types::{AudioConfig, SynthesisInput, SynthesizeRequest, SynthesizeResponse, VoiceSelectionParams};
