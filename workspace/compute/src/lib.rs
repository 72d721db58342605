//! Temperature dataset handling and the state machines behind the
//! visualization host and the chart loader.

pub mod dataset;
pub mod error;
pub mod figure;
pub mod host;
pub mod loader;

pub use dataset::{Dataset, monthly_summary, parse_dataset};
pub use error::{ComputeError, Result};
pub use figure::{Figure, Series, build_figure};
pub use host::{VisualizationHost, frame_height_for_width};
pub use loader::{ChartLoader, DatasetSource, LoadOutcome, LoaderOptions, LoaderView, PlotSurface};
