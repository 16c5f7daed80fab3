//! Application error taxonomy
//!
//! Exactly two failure kinds exist, one per external provider. Both are
//! recovered at the HTTP boundary; neither ever aborts the process.

use thiserror::Error;

use super::ports::{ChatError, SpeechError};

/// Relay error
#[derive(Debug, Error)]
pub enum RelayError {
    /// The chat-completion call failed
    #[error("lyrics generation failed: {0}")]
    Generation(#[source] ChatError),

    /// The speech-synthesis call failed
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[source] SpeechError),
}
