//! Application Layer
//!
//! Ports (provider abstractions) and the two request-scoped services that
//! implement the relay's behavior.

mod error;
mod lyrics;
pub mod ports;
mod speech;

pub use error::RelayError;
pub use lyrics::{LyricsConfig, LyricsGenerator};
pub use speech::{SpeechConfig, SpeechSynthesizer};
