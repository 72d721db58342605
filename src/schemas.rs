use std::path::PathBuf;

use common::{ApiResponse, MonthlyTemperature};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// CSV file behind the dataset endpoint
    pub dataset_path: PathBuf,
    /// Directory with the built frontend bundle
    pub static_dir: PathBuf,
    /// Cache for parsed dataset summaries
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Monthly(Vec<MonthlyTemperature>),
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the dataset file exists ("available" or "missing")
    pub dataset: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dataset::get_dataset_csv,
        crate::handlers::dataset::get_monthly_temperatures,
    ),
    components(
        schemas(
            ApiResponse<Vec<MonthlyTemperature>>,
            ErrorResponse,
            HealthResponse,
            MonthlyTemperature,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dataset", description = "Temperature dataset endpoints"),
    ),
    info(
        title = "Phoenix Climate Data API",
        description = "Temperature dataset backing the Phoenix climate visualization",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
