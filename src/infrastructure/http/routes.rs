//! HTTP Routes
//!
//! API Endpoints:
//! - /generate-lyrics  POST  topic in, Korean lyrics out (JSON)
//! - /tts              POST  text in, MP3 bytes out
//! - /ping             GET   health check
//!
//! Anything else falls through to axum's default 404.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-lyrics", post(handlers::generate_lyrics))
        .route("/tts", post(handlers::synthesize_speech))
        .route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{LyricsConfig, LyricsGenerator, SpeechConfig, SpeechSynthesizer};
    use crate::infrastructure::adapters::{FakeChatClient, FakeSpeechClient};
    use crate::infrastructure::http::error::SYNTHESIS_FAILURE_BODY;
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_router(chat: FakeChatClient, speech: FakeSpeechClient) -> Router {
        let state = AppState::new(
            LyricsGenerator::new(Arc::new(chat), LyricsConfig::default()),
            SpeechSynthesizer::new(Arc::new(speech), SpeechConfig::default()),
        );
        create_routes().with_state(Arc::new(state))
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_lyrics_success() {
        let app = test_router(
            FakeChatClient::with_reply("[Verse]\n비가 내리던 밤\n[Chorus]\n너를 그리며"),
            FakeSpeechClient::default(),
        );

        let response = app
            .oneshot(json_post(
                "/generate-lyrics",
                serde_json::json!({"prompt": "비 오는 가을밤"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let lyrics = body["lyrics"].as_str().unwrap();
        assert!(lyrics.contains("[Verse]"));
        assert!(lyrics.contains("[Chorus]"));
    }

    #[tokio::test]
    async fn test_generate_lyrics_failure_exposes_cause() {
        let app = test_router(
            FakeChatClient::failing("quota exceeded"),
            FakeSpeechClient::default(),
        );

        let response = app
            .oneshot(json_post(
                "/generate-lyrics",
                serde_json::json!({"prompt": "바다"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("가사 생성 실패"));
        assert!(error.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_generate_lyrics_missing_prompt_passes_through() {
        // No validation rejection: an absent prompt reaches the provider
        // as an empty string.
        let app = test_router(FakeChatClient::echoing(), FakeSpeechClient::default());

        let response = app
            .oneshot(json_post("/generate-lyrics", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["lyrics"].as_str().unwrap().starts_with("\"\" 주제로"));
    }

    #[tokio::test]
    async fn test_concurrent_lyrics_requests_do_not_cross_talk() {
        let app = test_router(FakeChatClient::echoing(), FakeSpeechClient::default());

        let first = app.clone().oneshot(json_post(
            "/generate-lyrics",
            serde_json::json!({"prompt": "첫 번째 주제"}),
        ));
        let second = app.clone().oneshot(json_post(
            "/generate-lyrics",
            serde_json::json!({"prompt": "두 번째 주제"}),
        ));

        let (first, second) = tokio::join!(first, second);

        let first_body = json_body(first.unwrap()).await;
        let second_body = json_body(second.unwrap()).await;
        assert!(first_body["lyrics"].as_str().unwrap().contains("첫 번째 주제"));
        assert!(second_body["lyrics"].as_str().unwrap().contains("두 번째 주제"));
    }

    #[tokio::test]
    async fn test_tts_success_returns_mp3() {
        let audio = vec![0xFF, 0xFB, 0x90, 0x00, 0x01, 0x02];
        let app = test_router(
            FakeChatClient::with_reply("unused"),
            FakeSpeechClient::with_audio(audio.clone()),
        );

        let response = app
            .oneshot(json_post("/tts", serde_json::json!({"text": "안녕하세요"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/mpeg"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), audio.as_slice());
        // MP3 frame sync
        assert_eq!(bytes[0], 0xFF);
        assert_eq!(bytes[1] & 0xE0, 0xE0);
    }

    #[tokio::test]
    async fn test_tts_failure_is_fixed_plain_text() {
        let app = test_router(
            FakeChatClient::with_reply("unused"),
            FakeSpeechClient::failing("credential error detail"),
        );

        let response = app
            .oneshot(json_post("/tts", serde_json::json!({"text": "안녕하세요"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = std::str::from_utf8(&bytes).unwrap();
        // Fixed message only; provider detail is not leaked
        assert_eq!(body, SYNTHESIS_FAILURE_BODY);
        assert!(!body.contains("credential error detail"));
    }

    #[tokio::test]
    async fn test_tts_missing_text_passes_through() {
        let app = test_router(FakeChatClient::with_reply("unused"), FakeSpeechClient::default());

        let response = app
            .oneshot(json_post("/tts", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_router(FakeChatClient::with_reply("unused"), FakeSpeechClient::default());

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_router(FakeChatClient::with_reply("unused"), FakeSpeechClient::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
