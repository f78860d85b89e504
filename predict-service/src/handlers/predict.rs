use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::JsonBody;

use crate::dtos::{PredictRequest, PredictResponse};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn predict(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let response = state.responder.respond(&request.text).await.map_err(|e| {
        tracing::error!(error = %e, "Error in prediction");
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    Ok(Json(PredictResponse { response }))
}
