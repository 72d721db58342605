use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;

use crate::helpers::dataset_file::dataset_available;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let dataset = if dataset_available(&state.dataset_path).await {
        "available"
    } else {
        "missing"
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: dataset.to_string(),
    };

    Ok(Json(response))
}
