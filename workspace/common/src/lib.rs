//! Common types shared between the server and the wasm frontend.
//! Chart selection, frame load state, temperature records and the static
//! page content live here so both sides agree on names and wire shapes.

mod chart;
mod content;
mod temperature;

pub use chart::{ChartType, LoadState, ValueSource};
pub use content::{
    InfoCard, ResourceLink, VideoEmbed, FEATURED_VIDEO, INFO_CARDS, RESOURCE_LINKS,
};
pub use temperature::{MONTH_NAMES, MonthlyTemperature, TemperatureRecord};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path the visualization host loads into its iframe.
pub const FRAME_PATH: &str = "/visualization/index.html";

/// Path the chart loader fetches its dataset from.
pub const DATASET_PATH: &str = "/temperature_data.csv";

/// DOM id of the element the plotting facility renders into.
pub const PLOT_CONTAINER_ID: &str = "plotly-container";

/// Prefix of every dataset failure shown inside the frame.
pub const DATASET_ERROR_PREFIX: &str = "Error loading temperature data: ";

/// Generic API response wrapper returned by the `/api/v1` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
