use axum::Json;
use serde::Deserialize;
use shared::emotion::{classify, EmotionReport};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Run the keyword classifier over a piece of text.
/// POST /analyze
///
/// Pure computation, nothing persisted. Any string is valid input; text
/// without recognized keywords (including the empty string) comes back
/// neutral. The language hint is accepted but the keyword table is
/// English-only for now.
pub async fn analyze_emotion(Json(req): Json<AnalyzeRequest>) -> Json<EmotionReport> {
    Json(classify(&req.text, &req.language))
}
