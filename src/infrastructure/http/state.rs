//! Application State
//!
//! The only state the router carries: two immutable service handles built
//! once at startup and shared read-only by every request. Constructed from
//! injected engines, so tests substitute fakes without touching the routes.

use crate::application::{LyricsGenerator, SpeechSynthesizer};

/// Application state
pub struct AppState {
    pub lyrics: LyricsGenerator,
    pub speech: SpeechSynthesizer,
}

impl AppState {
    pub fn new(lyrics: LyricsGenerator, speech: SpeechSynthesizer) -> Self {
        Self { lyrics, speech }
    }
}
