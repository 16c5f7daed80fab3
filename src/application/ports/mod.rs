//! Application Ports - outbound abstractions
//!
//! Interfaces between the application layer and the external providers.

mod chat_engine;
mod speech_engine;

pub use chat_engine::{ChatEnginePort, ChatError, ChatMessage, ChatRole, CompletionRequest};
pub use speech_engine::{SpeechEnginePort, SpeechError, SynthesisRequest, VoiceParams};
