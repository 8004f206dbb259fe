/*
 * Responsibility
 * - GET /health (liveness probe)
 * - must stay dependency-free so orchestration checks never flake
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "healthy"})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_always_succeeds() {
        for _ in 0..10 {
            let res = health().await.into_response();
            assert_eq!(res.status(), StatusCode::OK);
        }
    }
}
