use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use common::{ApiResponse, MonthlyTemperature};
use tracing::{debug, error, instrument, warn};

use crate::helpers::dataset_file::{DatasetFileError, load_monthly_summary, read_dataset_text};
use crate::schemas::{AppState, CachedData, ErrorResponse};

const MONTHLY_CACHE_KEY: &str = "monthly_summary";

fn dataset_error(err: DatasetFileError) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status();
    if status.is_server_error() {
        error!("Dataset request failed: {}", err);
    } else {
        warn!("Dataset request failed: {}", err);
    }
    (status, Json(ErrorResponse::new(err.to_string(), err.code())))
}

/// Raw temperature dataset consumed by the chart frame
#[utoipa::path(
    get,
    path = "/temperature_data.csv",
    tag = "dataset",
    responses(
        (status = 200, description = "Dataset CSV", body = String, content_type = "text/csv"),
        (status = 404, description = "Dataset file missing", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dataset_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let text = read_dataset_text(&state.dataset_path)
        .await
        .map_err(dataset_error)?;

    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], text))
}

/// Monthly summary of the temperature dataset
#[utoipa::path(
    get,
    path = "/api/v1/temperature/monthly",
    tag = "dataset",
    responses(
        (status = 200, description = "Monthly temperature summary", body = ApiResponse<Vec<MonthlyTemperature>>),
        (status = 404, description = "Dataset file missing", body = ErrorResponse),
        (status = 422, description = "Dataset could not be parsed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_temperatures(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MonthlyTemperature>>>, (StatusCode, Json<ErrorResponse>)> {
    if let Some(CachedData::Monthly(months)) = state.cache.get(MONTHLY_CACHE_KEY).await {
        debug!("Monthly summary served from cache");
        return Ok(Json(ApiResponse::ok(
            months,
            "Monthly temperatures retrieved from cache",
        )));
    }

    let months = load_monthly_summary(&state.dataset_path)
        .await
        .map_err(dataset_error)?;

    state
        .cache
        .insert(MONTHLY_CACHE_KEY.to_string(), CachedData::Monthly(months.clone()))
        .await;

    Ok(Json(ApiResponse::ok(
        months,
        "Monthly temperatures retrieved successfully",
    )))
}
