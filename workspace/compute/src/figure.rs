//! Trace and layout shaping for each chart type.
//!
//! Figures are built with the `plotly` builders and handed to the plotting
//! facility as JSON, which is what `Plotly.newPlot` consumes.

use common::{ChartType, MONTH_NAMES, MonthlyTemperature, ValueSource};
use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Bar, BoxPlot, Layout, Scatter};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{ComputeError, Result};

/// Sample monthly values rendered in placeholder mode.
pub const PLACEHOLDER_VALUES: [f64; 12] = [
    70.0, 75.0, 80.0, 90.0, 95.0, 100.0, 105.0, 110.0, 105.0, 95.0, 85.0, 75.0,
];

pub const TRACE_NAME: &str = "Temperature";
pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Temperature (°F)";

const PLACEHOLDER_SUFFIX: &str = " (Placeholder)";

/// Labelled values for a single trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Trace name shown in the legend
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn placeholder() -> Self {
        Self {
            name: TRACE_NAME.to_string(),
            labels: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
            values: PLACEHOLDER_VALUES.to_vec(),
        }
    }

    /// One series per year present, oldest first, each holding the mean
    /// daily average of its months. Months without an average are skipped.
    pub fn per_year(months: &[MonthlyTemperature]) -> Result<Vec<Self>> {
        let mut series: Vec<Self> = Vec::new();
        for month in months {
            let Some(avg) = month.mean_avg else {
                continue;
            };
            let name = month.year.to_string();
            match series.last_mut() {
                Some(current) if current.name == name => {
                    current.labels.push(month.month_name.clone());
                    current.values.push(avg);
                }
                _ => series.push(Self {
                    name,
                    labels: vec![month.month_name.clone()],
                    values: vec![avg],
                }),
            }
        }

        if series.is_empty() {
            return Err(ComputeError::EmptyDataset);
        }
        Ok(series)
    }
}

/// Traces plus layout, ready for the plotting facility.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub traces: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Options passed as the fourth argument of the render call.
    pub fn config() -> Value {
        json!({ "responsive": true })
    }

    pub fn title(&self) -> Option<&str> {
        self.layout["title"]["text"].as_str()
    }
}

pub fn chart_title(chart_type: ChartType, source: ValueSource) -> String {
    let base = match chart_type {
        ChartType::Line => "Temperature Visualization",
        ChartType::Box => "Temperature Distribution",
        ChartType::Bar => "Monthly Temperatures",
    };
    match source {
        ValueSource::Placeholder => format!("{}{}", base, PLACEHOLDER_SUFFIX),
        ValueSource::Dataset => base.to_string(),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| ComputeError::Render(e.to_string()))
}

fn axis(title: &str) -> Axis {
    Axis::new().title(Title::with_text(title))
}

fn trace(chart_type: ChartType, series: &Series) -> Result<Value> {
    let labels = series.labels.clone();
    let values = series.values.clone();
    let name = series.name.as_str();

    match chart_type {
        ChartType::Line => to_json(
            &Scatter::new(labels, values)
                .mode(Mode::LinesMarkers)
                .name(name),
        ),
        ChartType::Box => to_json(&BoxPlot::<f64, f64>::new(values).name(name)),
        ChartType::Bar => to_json(&Bar::new(labels, values).name(name)),
    }
}

/// Build the figure for `chart_type` with one trace per series.
pub fn build_figure(chart_type: ChartType, series: &[Series], source: ValueSource) -> Result<Figure> {
    let title = Title::with_text(&chart_title(chart_type, source));
    let layout = match chart_type {
        ChartType::Box => Layout::new().title(title).y_axis(axis(Y_AXIS_TITLE)),
        ChartType::Line | ChartType::Bar => Layout::new()
            .title(title)
            .x_axis(axis(X_AXIS_TITLE))
            .y_axis(axis(Y_AXIS_TITLE)),
    };

    let traces = series
        .iter()
        .map(|s| trace(chart_type, s))
        .collect::<Result<Vec<_>>>()?;

    Ok(Figure {
        traces,
        layout: to_json(&layout)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(chart_type: ChartType) -> Figure {
        build_figure(chart_type, &[Series::placeholder()], ValueSource::Placeholder).unwrap()
    }

    fn y_values(trace: &Value) -> Vec<f64> {
        trace["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect()
    }

    #[test]
    fn test_line_figure() {
        let figure = placeholder(ChartType::Line);
        assert_eq!(figure.traces.len(), 1);

        let trace = &figure.traces[0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["name"], "Temperature");
        assert_eq!(trace["x"][0], "Jan");
        assert_eq!(trace["x"][11], "Dec");
        assert_eq!(y_values(trace), PLACEHOLDER_VALUES.to_vec());

        assert_eq!(figure.title(), Some("Temperature Visualization (Placeholder)"));
        assert_eq!(figure.layout["xaxis"]["title"]["text"], "Month");
        assert_eq!(figure.layout["yaxis"]["title"]["text"], "Temperature (°F)");
    }

    #[test]
    fn test_box_figure_has_no_x() {
        let figure = placeholder(ChartType::Box);
        let trace = &figure.traces[0];
        assert_eq!(trace["type"], "box");
        assert!(trace.get("x").is_none());
        assert_eq!(y_values(trace), PLACEHOLDER_VALUES.to_vec());

        assert_eq!(figure.title(), Some("Temperature Distribution (Placeholder)"));
        assert!(figure.layout.get("xaxis").is_none());
        assert_eq!(figure.layout["yaxis"]["title"]["text"], "Temperature (°F)");
    }

    #[test]
    fn test_bar_figure() {
        let figure = placeholder(ChartType::Bar);
        let trace = &figure.traces[0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"].as_array().unwrap().len(), 12);
        assert_eq!(figure.title(), Some("Monthly Temperatures (Placeholder)"));
        assert_eq!(figure.layout["xaxis"]["title"]["text"], "Month");
    }

    #[test]
    fn test_dataset_titles_drop_placeholder_suffix() {
        assert_eq!(
            chart_title(ChartType::Line, ValueSource::Dataset),
            "Temperature Visualization"
        );
        assert_eq!(
            chart_title(ChartType::Bar, ValueSource::Placeholder),
            "Monthly Temperatures (Placeholder)"
        );
    }

    #[test]
    fn test_series_per_year_skips_months_without_average() {
        let months = vec![
            MonthlyTemperature {
                mean_avg: Some(55.0),
                days: 2,
                ..MonthlyTemperature::empty(2024, 1)
            },
            MonthlyTemperature::empty(2024, 2),
            MonthlyTemperature {
                mean_avg: Some(101.0),
                days: 1,
                ..MonthlyTemperature::empty(2024, 7)
            },
        ];
        let series = Series::per_year(&months).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "2024");
        assert_eq!(series[0].labels, vec!["Jan", "Jul"]);
        assert_eq!(series[0].values, vec![55.0, 101.0]);
    }

    #[test]
    fn test_series_per_year_splits_years() {
        let months = vec![
            MonthlyTemperature {
                mean_avg: Some(92.0),
                ..MonthlyTemperature::empty(1990, 7)
            },
            MonthlyTemperature {
                mean_avg: Some(102.0),
                ..MonthlyTemperature::empty(2024, 7)
            },
        ];
        let series = Series::per_year(&months).unwrap();
        let names: Vec<_> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["1990", "2024"]);
        assert_eq!(series[0].values, vec![92.0]);
        assert_eq!(series[1].values, vec![102.0]);
    }

    #[test]
    fn test_series_from_empty_months_fails() {
        assert_eq!(Series::per_year(&[]), Err(ComputeError::EmptyDataset));
    }

    #[test]
    fn test_one_trace_per_series() {
        let series = vec![
            Series {
                name: "1990".to_string(),
                labels: vec!["Jul".to_string()],
                values: vec![92.0],
            },
            Series {
                name: "2024".to_string(),
                labels: vec!["Jul".to_string()],
                values: vec![102.0],
            },
        ];

        for chart_type in ChartType::ALL {
            let figure = build_figure(chart_type, &series, ValueSource::Dataset).unwrap();
            assert_eq!(figure.traces.len(), 2);
            assert_eq!(figure.traces[0]["name"], "1990");
            assert_eq!(figure.traces[1]["name"], "2024");
            assert_eq!(y_values(&figure.traces[1]), vec![102.0]);
        }
    }

    #[test]
    fn test_config_is_responsive() {
        assert_eq!(Figure::config(), json!({ "responsive": true }));
    }
}
