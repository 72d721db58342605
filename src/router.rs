use crate::handlers::{
    dataset::{get_dataset_csv, get_monthly_temperatures},
    health::health_check,
    pages::index,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use common::{DATASET_PATH, FRAME_PATH};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Page shell for the host page and the chart frame
        .route("/", get(index))
        .route(FRAME_PATH, get(index))
        // Dataset
        .route(DATASET_PATH, get(get_dataset_csv))
        .route("/api/v1/temperature/monthly", get(get_monthly_temperatures))
        // Built frontend bundle
        .nest_service("/pkg", assets)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
