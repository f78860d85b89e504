use axum::Json;

use crate::dtos::HealthResponse;

/// Liveness only; the model artifact is not consulted.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
