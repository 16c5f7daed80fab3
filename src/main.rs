//! norae - Korean lyrics and speech relay

use std::sync::Arc;

use norae::application::{LyricsConfig, LyricsGenerator, SpeechConfig, SpeechSynthesizer};
use norae::config::{load_config, print_config};
use norae::infrastructure::adapters::{
    GcpSpeechClient, GcpSpeechClientConfig, OpenAiChatClient, OpenAiChatClientConfig,
};
use norae::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let log_filter = format!("{},norae={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("norae - lyrics and speech relay");
    print_config(&config);

    // Provider clients, built once and shared read-only by all requests
    let chat_client = OpenAiChatClient::new(OpenAiChatClientConfig {
        api_key: config.openai.api_key.clone(),
        base_url: config.openai.base_url.clone(),
        timeout_secs: config.openai.timeout_secs,
    })?;

    let speech_client = GcpSpeechClient::new(GcpSpeechClientConfig {
        credentials_path: config.speech.credentials_path.clone(),
        endpoint: config.speech.endpoint.clone(),
        timeout_secs: config.speech.timeout_secs,
    })?;

    let lyrics = LyricsGenerator::new(
        Arc::new(chat_client),
        LyricsConfig {
            model: config.openai.model.clone(),
            temperature: config.openai.temperature,
        },
    );

    let speech = SpeechSynthesizer::new(
        Arc::new(speech_client),
        SpeechConfig {
            language_code: config.speech.language_code.clone(),
            voice: config.speech.voice.clone(),
            audio_encoding: config.speech.audio_encoding.clone(),
            speaking_rate: config.speech.speaking_rate,
            pitch: config.speech.pitch,
        },
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(lyrics, speech);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
