//! HTTP Error Mapping
//!
//! The closed `RelayError` taxonomy is mapped to responses here, in one
//! place. The two routes deliberately differ in what they expose:
//! generation failures return JSON carrying the provider's error text,
//! synthesis failures return a fixed plain-text message with no detail.
//! Both are logged before the response is produced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::RelayError;

/// Fixed body for synthesis failures; provider detail is never leaked.
pub const SYNTHESIS_FAILURE_BODY: &str = "TTS 생성 실패";

/// Prefix for the generation failure message exposed to the caller.
pub const GENERATION_FAILURE_PREFIX: &str = "가사 생성 실패";

/// API error - a `RelayError` crossing the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            RelayError::Generation(cause) => {
                tracing::error!(error = %cause, "OpenAI chat completion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("{}: {}", GENERATION_FAILURE_PREFIX, cause),
                    }),
                )
                    .into_response()
            }
            RelayError::Synthesis(cause) => {
                tracing::error!(error = %cause, "Speech synthesis failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SYNTHESIS_FAILURE_BODY).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ChatError, SpeechError};
    use http::header::CONTENT_TYPE;

    #[test]
    fn test_generation_failure_is_json_500() {
        let error = ApiError(RelayError::Generation(ChatError::ServiceError(
            "quota".to_string(),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers().get(CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[test]
    fn test_synthesis_failure_is_plain_text_500() {
        let error = ApiError(RelayError::Synthesis(SpeechError::ServiceError(
            "quota".to_string(),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers().get(CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }
}
