#[cfg(test)]
mod integration_tests {
    use std::path::PathBuf;

    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        init_test_tracing, setup_test_app, setup_test_app_with_dataset, write_temp_dataset,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ApiResponse, MonthlyTemperature};

    fn missing_dataset() -> PathBuf {
        std::env::temp_dir().join("phoenix-climate-missing.csv")
    }

    #[tokio::test]
    async fn test_tracing_outlives_app_setup() {
        let server = TestServer::new(setup_test_app()).unwrap();
        init_test_tracing();

        assert!(tracing::dispatcher::has_been_set());
        server.get("/health").await.assert_status_ok();
        assert!(tracing::dispatcher::has_been_set());
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.dataset, "available");
    }

    #[tokio::test]
    async fn test_health_check_reports_missing_dataset() {
        let server = TestServer::new(setup_test_app_with_dataset(missing_dataset())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.dataset, "missing");
    }

    #[tokio::test]
    async fn test_dataset_csv_is_served() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/temperature_data.csv").await;

        response.assert_status(StatusCode::OK);
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("text/csv"));
        let body = response.text();
        assert!(body.starts_with("Date,Max Temperature,Min Temperature,Avg Temperature"));
        assert_eq!(body.lines().count(), 49);
    }

    #[tokio::test]
    async fn test_missing_dataset_returns_not_found() {
        let server = TestServer::new(setup_test_app_with_dataset(missing_dataset())).unwrap();

        let response = server.get("/temperature_data.csv").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "DATASET_NOT_FOUND");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_monthly_temperatures() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/temperature/monthly").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<MonthlyTemperature>> = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 24);

        let jan_1990 = &body.data[0];
        assert_eq!((jan_1990.year, jan_1990.month_name.as_str()), (1990, "Jan"));
        assert_eq!(jan_1990.mean_avg, Some(52.5));

        let jan_2024 = &body.data[12];
        assert_eq!((jan_2024.year, jan_2024.month_name.as_str()), (2024, "Jan"));
        assert_eq!(jan_2024.mean_avg, Some(56.25));
        assert_eq!(body.data[23].month_name, "Dec");
    }

    #[tokio::test]
    async fn test_monthly_temperatures_separates_years() {
        let path = write_temp_dataset(
            "two-years",
            "Date,Max Temperature,Min Temperature,Avg Temperature\n\
             1990-07-01,104,80,92\n\
             2024-07-01,112,92,102\n",
        );
        let server = TestServer::new(setup_test_app_with_dataset(path.clone())).unwrap();

        let response = server.get("/api/v1/temperature/monthly").await;
        std::fs::remove_file(&path).ok();

        response.assert_status_ok();
        let body: ApiResponse<Vec<MonthlyTemperature>> = response.json();
        let july: Vec<_> = body.data.iter().map(|m| (m.year, m.mean_avg)).collect();
        assert_eq!(july, vec![(1990, Some(92.0)), (2024, Some(102.0))]);
    }

    #[tokio::test]
    async fn test_monthly_temperatures_second_request_hits_cache() {
        let server = TestServer::new(setup_test_app()).unwrap();

        server.get("/api/v1/temperature/monthly").await.assert_status_ok();
        let response = server.get("/api/v1/temperature/monthly").await;

        response.assert_status_ok();
        let body: ApiResponse<Vec<MonthlyTemperature>> = response.json();
        assert_eq!(body.message, "Monthly temperatures retrieved from cache");
        assert_eq!(body.data.len(), 24);
    }

    #[tokio::test]
    async fn test_monthly_temperatures_invalid_dataset() {
        let path = write_temp_dataset("invalid", "Date,Max Temp,Min Temp,Avg Temp\nnever,1,2,3\n");
        let server = TestServer::new(setup_test_app_with_dataset(path.clone())).unwrap();

        let response = server.get("/api/v1/temperature/monthly").await;
        std::fs::remove_file(&path).ok();

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "DATASET_INVALID");
        assert!(body.error.contains("Invalid date 'never' on row 1"));
    }

    #[tokio::test]
    async fn test_index_and_frame_share_the_shell() {
        let server = TestServer::new(setup_test_app()).unwrap();

        for path in ["/", "/visualization/index.html"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body = response.text();
            assert!(body.contains("/pkg/frontend.js"), "{} is missing the bundle", path);
            assert!(body.contains("plotly"), "{} is missing plotly", path);
        }
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/pkg/frontend.js").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = TestServer::new(setup_test_app()).unwrap();

        server.get("/api/v1/unknown").await.assert_status(StatusCode::NOT_FOUND);
    }
}
