//! Chart loader state machine.
//!
//! The loader owns the selected chart type and the visibility of the loading
//! indicator and error element. A load fetches the dataset, shapes a figure
//! for the requested chart type and hands it to the plotting surface.
//!
//! Loads are not cancelled or de-duplicated. Several loads may be in flight
//! at once; whichever completes last decides what the view shows.

use std::cell::RefCell;

use async_trait::async_trait;
use common::{ChartType, DATASET_ERROR_PREFIX, DATASET_PATH, PLOT_CONTAINER_ID, ValueSource};
use serde_json::Value;
use tracing::{debug, info, instrument, trace, warn};

use crate::dataset::parse_dataset;
use crate::error::Result;
use crate::figure::{Figure, Series, build_figure};

/// Fetches the raw dataset text.
#[async_trait(?Send)]
pub trait DatasetSource {
    /// Resolve `path` to the response body. Non-success statuses must be
    /// reported as `ComputeError::Http`.
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// The external plotting facility.
pub trait PlotSurface {
    /// Whether the facility is loaded and can accept render calls.
    fn is_available(&self) -> bool;

    /// Render `figure` into the element with id `container_id`.
    fn new_plot(&self, container_id: &str, figure: &Figure, config: &Value) -> Result<()>;
}

/// Fixed inputs of a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    pub dataset_path: String,
    pub container_id: String,
    pub value_source: ValueSource,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            dataset_path: DATASET_PATH.to_string(),
            container_id: PLOT_CONTAINER_ID.to_string(),
            value_source: ValueSource::default(),
        }
    }
}

/// What the frame currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoaderView {
    pub chart_type: ChartType,
    pub loading_visible: bool,
    pub error_visible: bool,
    pub error_message: String,
}

impl LoaderView {
    /// Whether the control for `chart_type` carries the active marker.
    pub fn is_active(&self, chart_type: ChartType) -> bool {
        self.chart_type == chart_type
    }

    pub fn active_controls(&self) -> Vec<ChartType> {
        ChartType::ALL
            .into_iter()
            .filter(|c| self.is_active(*c))
            .collect()
    }
}

/// Result of one load routine.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The figure was handed to the plotting surface.
    Rendered(ChartType),
    /// The dataset loaded but the plotting surface is missing.
    RenderSkipped(ChartType),
    /// The error element is showing this message.
    Failed(String),
}

pub struct ChartLoader<S, P> {
    source: S,
    surface: P,
    options: LoaderOptions,
    view: RefCell<LoaderView>,
}

impl<S: DatasetSource, P: PlotSurface> ChartLoader<S, P> {
    pub fn new(source: S, surface: P, options: LoaderOptions) -> Self {
        Self {
            source,
            surface,
            options,
            view: RefCell::new(LoaderView::default()),
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> LoaderView {
        self.view.borrow().clone()
    }

    pub fn chart_type(&self) -> ChartType {
        self.view.borrow().chart_type
    }

    /// Initial load, run once without user interaction.
    pub async fn start(&self) -> LoadOutcome {
        info!("Chart loader ready, loading default visualization");
        self.select(ChartType::default()).await
    }

    /// A control for `chart_type` was pressed.
    pub async fn select(&self, chart_type: ChartType) -> LoadOutcome {
        self.activate(chart_type);
        self.load(chart_type).await
    }

    /// Mark `chart_type` as selected. Its control becomes the only active one.
    pub fn activate(&self, chart_type: ChartType) {
        debug!(%chart_type, "Activating chart type");
        self.view.borrow_mut().chart_type = chart_type;
    }

    /// Show the loading indicator.
    pub fn begin_load(&self) {
        self.view.borrow_mut().loading_visible = true;
    }

    /// Run the full load routine for `chart_type`.
    pub async fn load(&self, chart_type: ChartType) -> LoadOutcome {
        self.begin_load();
        self.finish_load(chart_type).await
    }

    /// Fetch, shape and render. Expects `begin_load` to have run.
    #[instrument(skip(self), fields(path = %self.options.dataset_path))]
    pub async fn finish_load(&self, chart_type: ChartType) -> LoadOutcome {
        let fetched = self.source.fetch_text(&self.options.dataset_path).await;
        let result = fetched
            .and_then(|text| {
                trace!(bytes = text.len(), "Temperature data loaded");
                self.shape(chart_type, &text)
            })
            .and_then(|figure| self.render(chart_type, &figure));

        match result {
            Ok(outcome) => {
                let mut view = self.view.borrow_mut();
                view.loading_visible = false;
                view.error_visible = false;
                view.error_message.clear();
                outcome
            }
            Err(err) => {
                warn!(error = %err, "Error loading temperature data");
                let message = format!("{}{}", DATASET_ERROR_PREFIX, err);
                let mut view = self.view.borrow_mut();
                view.loading_visible = false;
                view.error_visible = true;
                view.error_message = message.clone();
                LoadOutcome::Failed(message)
            }
        }
    }

    fn shape(&self, chart_type: ChartType, text: &str) -> Result<Figure> {
        let source = self.options.value_source;
        let series = match source {
            ValueSource::Placeholder => vec![Series::placeholder()],
            ValueSource::Dataset => {
                let dataset = parse_dataset(text)?;
                Series::per_year(&dataset.monthly_summary())?
            }
        };
        build_figure(chart_type, &series, source)
    }

    fn render(&self, chart_type: ChartType, figure: &Figure) -> Result<LoadOutcome> {
        if !self.surface.is_available() {
            warn!("Plotting facility is not defined, skipping render");
            return Ok(LoadOutcome::RenderSkipped(chart_type));
        }

        self.surface
            .new_plot(&self.options.container_id, figure, &Figure::config())?;
        debug!(%chart_type, "Rendered visualization");
        Ok(LoadOutcome::Rendered(chart_type))
    }
}
