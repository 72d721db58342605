use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, trace, warn};

use crate::helpers::dataset_file::read_dataset_text;

pub async fn inspect_dataset(path: &Path) -> Result<()> {
    trace!("Entering inspect_dataset function");
    info!("Inspecting dataset {}", path.display());

    let text = read_dataset_text(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let dataset = match compute::parse_dataset(&text) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Dataset {} is invalid: {}", path.display(), e);
            return Err(e.into());
        }
    };

    info!("Parsed {} daily rows", dataset.len());
    match dataset.date_span() {
        Some((first, last)) => info!("Dates span {} to {}", first, last),
        None => {
            warn!("Dataset has a header but no rows");
            return Ok(());
        }
    }

    for month in dataset.monthly_summary() {
        info!(
            "{} {}: {} days, avg {}, max {}, min {}",
            month.month_name,
            month.year,
            month.days,
            format_temperature(month.mean_avg),
            format_temperature(month.max),
            format_temperature(month.min),
        );
    }

    Ok(())
}

fn format_temperature(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}°F", v))
        .unwrap_or_else(|| "n/a".to_string())
}
