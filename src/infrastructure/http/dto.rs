//! Data Transfer Objects
//!
//! Request fields default to the empty string when absent: neither route
//! validates its input, and an undefined topic or text is forwarded to the
//! provider as-is.

use serde::{Deserialize, Serialize};

/// Request body for POST /generate-lyrics
#[derive(Debug, Deserialize)]
pub struct LyricsRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Success body for POST /generate-lyrics
#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics: String,
}

/// Request body for POST /tts
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
}

/// Failure body for POST /generate-lyrics
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_prompt_defaults_to_empty() {
        let request: LyricsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.prompt, "");
    }

    #[test]
    fn test_absent_text_defaults_to_empty() {
        let request: SpeechRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
    }

    #[test]
    fn test_lyrics_response_shape() {
        let value = serde_json::to_value(LyricsResponse {
            lyrics: "[Verse]...".to_string(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"lyrics": "[Verse]..."}));
    }
}
