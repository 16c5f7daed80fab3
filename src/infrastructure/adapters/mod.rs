//! Infrastructure Adapters
//!
//! Outbound implementations of the application ports.

pub mod gcp_tts;
pub mod openai;

pub use gcp_tts::*;
pub use openai::*;
