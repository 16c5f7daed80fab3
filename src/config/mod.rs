//! Configuration
//!
//! Layered configuration: defaults < config file < environment variables.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, LogSettings, OpenAiSettings, ServerSettings, SpeechSettings};
