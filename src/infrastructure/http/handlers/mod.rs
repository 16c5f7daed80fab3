//! HTTP Handlers

mod lyrics;
mod ping;
mod tts;

pub use lyrics::*;
pub use ping::*;
pub use tts::*;
