//! Configuration Loader
//!
//! Merge order, lowest priority first:
//! 1. Built-in defaults
//! 2. Config file (`config.toml` / `config.local.toml`)
//! 3. Environment variables (prefix `NORAE_`, separator `__`)
//! 4. Legacy environment names `OPENAI_API_KEY` and `PORT`

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration load error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Config file search names (extension resolved by the config crate)
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment examples:
/// - `NORAE_SERVER__PORT=8080`
/// - `NORAE_OPENAI__MODEL=gpt-4o-mini`
/// - `NORAE_SPEECH__CREDENTIALS_PATH=/etc/norae/credentials.json`
///
/// The plain `OPENAI_API_KEY` and `PORT` variables are also honored, with
/// the highest priority, for compatibility with the original deployment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path, or the default search
/// paths when `config_path` is `None`.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = base_builder(config_path)?;

    // 3. Prefixed environment variables
    builder = builder.add_source(
        Environment::with_prefix("NORAE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. Legacy environment names override everything else
    builder = apply_legacy_overrides(
        builder,
        std::env::var("PORT").ok(),
        std::env::var("OPENAI_API_KEY").ok(),
    )?;

    finish(builder)
}

/// Defaults plus the optional config file; no environment sources, so
/// tests can merge and assert hermetically.
fn base_builder(
    config_path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    // 1. Defaults (lowest priority)
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("openai.api_key", "")?
        .set_default("openai.base_url", "https://api.openai.com")?
        .set_default("openai.model", "gpt-4o")?
        .set_default("openai.temperature", 0.9)?
        .set_default("openai.timeout_secs", 120)?
        .set_default("speech.credentials_path", "./credentials.json")?
        .set_default(
            "speech.endpoint",
            "https://texttospeech.googleapis.com/v1/text:synthesize",
        )?
        .set_default("speech.language_code", "ko-KR")?
        .set_default("speech.voice", "ko-KR-Neural2-A")?
        .set_default("speech.audio_encoding", "MP3")?
        .set_default("speech.speaking_rate", 1.0)?
        .set_default("speech.pitch", 0.0)?
        .set_default("speech.timeout_secs", 120)?
        .set_default("log.level", "info")?;

    // 2. Config file (if present)
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    Ok(builder)
}

/// Apply the legacy `PORT` / `OPENAI_API_KEY` values when present.
fn apply_legacy_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    port: Option<String>,
    api_key: Option<String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }
    if let Some(api_key) = api_key {
        builder = builder.set_override("openai.api_key", api_key)?;
    }
    Ok(builder)
}

/// Build, deserialize and validate the merged configuration.
fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the merged configuration.
///
/// The OpenAI API key is deliberately not checked here: a missing key is
/// only observable as a failed provider call on the first request.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.openai.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "OpenAI model cannot be empty".to_string(),
        ));
    }

    if config.speech.voice.is_empty() || config.speech.language_code.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech voice and language code cannot be empty".to_string(),
        ));
    }

    if config.speech.credentials_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech credentials path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup. Secrets are not printed.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("OpenAI Model: {}", config.openai.model);
    tracing::info!("OpenAI Temperature: {}", config.openai.temperature);
    tracing::info!(
        "OpenAI API Key: {}",
        if config.openai.api_key.is_empty() {
            "(not set)"
        } else {
            "(set)"
        }
    );
    tracing::info!("Speech Voice: {} ({})", config.speech.voice, config.speech.language_code);
    tracing::info!("Speech Encoding: {}", config.speech.audio_encoding);
    tracing::info!("Speech Credentials: {}", config.speech.credentials_path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
