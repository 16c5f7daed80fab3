//! Lyrics Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{LyricsRequest, LyricsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /generate-lyrics
pub async fn generate_lyrics(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LyricsRequest>,
) -> Result<Json<LyricsResponse>, ApiError> {
    let lyrics = state.lyrics.generate(&req.prompt).await?;
    Ok(Json(LyricsResponse { lyrics }))
}
