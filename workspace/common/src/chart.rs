use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Visualization shape selected by the user inside the chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Box,
    Bar,
}

impl ChartType {
    /// All chart types in the order their controls are laid out.
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Box, ChartType::Bar];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Box => "box",
            ChartType::Bar => "bar",
        }
    }

    /// DOM id of the toggle control for this chart type.
    pub fn button_id(&self) -> &'static str {
        match self {
            ChartType::Line => "line-chart-btn",
            ChartType::Box => "box-plot-btn",
            ChartType::Bar => "bar-graph-btn",
        }
    }

    /// Label printed on the toggle control.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Box => "Box Plot",
            ChartType::Bar => "Bar Graph",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state of an embedded frame, owned by the visualization host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, LoadState::Error)
    }
}

/// Where the rendered temperature values come from.
///
/// `Placeholder` renders the fixed monthly sample regardless of what the
/// dataset endpoint returns. `Dataset` parses the fetched CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    #[default]
    Placeholder,
    Dataset,
}

impl FromStr for ValueSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(ValueSource::Placeholder),
            "dataset" => Ok(ValueSource::Dataset),
            other => Err(format!("unknown value source '{}'", other)),
        }
    }
}
