//! Reading the dataset file behind the dataset endpoint.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use common::MonthlyTemperature;
use compute::ComputeError;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum DatasetFileError {
    #[error("Dataset file {0} not found")]
    Missing(PathBuf),

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset is invalid: {0}")]
    Invalid(#[from] ComputeError),
}

impl DatasetFileError {
    pub fn status(&self) -> StatusCode {
        match self {
            DatasetFileError::Missing(_) => StatusCode::NOT_FOUND,
            DatasetFileError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DatasetFileError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DatasetFileError::Missing(_) => "DATASET_NOT_FOUND",
            DatasetFileError::Io(_) => "DATASET_UNREADABLE",
            DatasetFileError::Invalid(_) => "DATASET_INVALID",
        }
    }
}

pub async fn read_dataset_text(path: &Path) -> Result<String, DatasetFileError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            debug!(bytes = text.len(), "Read dataset file");
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(DatasetFileError::Missing(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument]
pub async fn load_monthly_summary(path: &Path) -> Result<Vec<MonthlyTemperature>, DatasetFileError> {
    let text = read_dataset_text(path).await?;
    let dataset = compute::parse_dataset(&text)?;
    Ok(dataset.monthly_summary())
}

pub async fn dataset_available(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}
