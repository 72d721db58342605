use thiserror::Error;
use tracing::error;

/// Error types for dataset loading, parsing and rendering.
///
/// The `Display` text is what the chart loader appends after its
/// user-facing prefix, so keep messages short and readable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// The dataset endpoint answered with a non-success status
    #[error("HTTP error! Status: {0}")]
    Http(u16),

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required column is absent from the header row
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A row whose date cell could not be parsed
    #[error("Invalid date '{value}' on row {row}")]
    InvalidDate { row: usize, value: String },

    /// A non-empty temperature cell that is not a number
    #[error("Invalid temperature '{value}' in column '{column}' on row {row}")]
    InvalidTemperature {
        row: usize,
        column: String,
        value: String,
    },

    /// Parsing succeeded but produced nothing to plot
    #[error("Dataset contains no temperature rows")]
    EmptyDataset,

    /// The plotting facility rejected the render call
    #[error("Render error: {0}")]
    Render(String),
}

impl From<csv::Error> for ComputeError {
    fn from(error: csv::Error) -> Self {
        let err = ComputeError::Csv(error.to_string());
        error!(?err, "CSV read failed");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
