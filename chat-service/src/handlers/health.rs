use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Reports the service itself only; the upstream AI API is
/// not contacted.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "Chat API is running with Google AI (Gemini Flash)"
    }))
}
