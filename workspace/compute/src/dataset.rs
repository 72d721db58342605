//! Temperature dataset parsing.
//!
//! The dataset is a headed CSV with one row per day. Column names follow the
//! NOAA export (`Max Temperature`, `Min Temperature`, `Avg Temperature`) but
//! the shortened `Max Temp` style is accepted as well.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use common::{MonthlyTemperature, TemperatureRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

const DATE_COLUMN: &[&str] = &["Date"];
const MAX_COLUMN: &[&str] = &["Max Temperature", "Max Temp"];
const MIN_COLUMN: &[&str] = &["Min Temperature", "Min Temp"];
const AVG_COLUMN: &[&str] = &["Avg Temperature", "Avg Temp"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parsed dataset rows in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub records: Vec<TemperatureRecord>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First and last date present, if any rows were parsed.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Summarize rows by year and calendar month, oldest year first and
    /// January first within a year. Months without rows are left out.
    pub fn monthly_summary(&self) -> Vec<MonthlyTemperature> {
        monthly_summary(&self.records)
    }
}

struct Columns {
    date: usize,
    max: usize,
    min: usize,
    avg: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            date: find_column(headers, DATE_COLUMN)?,
            max: find_column(headers, MAX_COLUMN)?,
            min: find_column(headers, MIN_COLUMN)?,
            avg: find_column(headers, AVG_COLUMN)?,
        })
    }
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        .ok_or_else(|| ComputeError::MissingColumn(names[0].to_string()))
}

fn parse_date(row: usize, value: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ComputeError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

fn parse_temperature(row: usize, column: &str, value: Option<&str>) -> Result<Option<f64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ComputeError::InvalidTemperature {
                row,
                column: column.to_string(),
                value: raw.to_string(),
            }),
    }
}

/// Parse the raw CSV text of a temperature dataset.
///
/// Row numbers in errors are 1-based and count data rows only.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers)?;
    trace!(?headers, "Located dataset columns");

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = index + 1;

        let date_cell = row.get(columns.date).unwrap_or_default();
        if date_cell.is_empty() && row.iter().all(str::is_empty) {
            continue;
        }

        records.push(TemperatureRecord {
            date: parse_date(row_number, date_cell)?,
            max: parse_temperature(row_number, MAX_COLUMN[0], row.get(columns.max))?,
            min: parse_temperature(row_number, MIN_COLUMN[0], row.get(columns.min))?,
            avg: parse_temperature(row_number, AVG_COLUMN[0], row.get(columns.avg))?,
        });
    }

    debug!(rows = records.len(), "Parsed temperature dataset");
    Ok(Dataset { records })
}

#[derive(Default)]
struct MonthAccumulator {
    days: usize,
    avg_sum: f64,
    avg_count: usize,
    max: Option<f64>,
    min: Option<f64>,
}

/// Aggregate daily records into per-month summaries. Rows of different years
/// are never merged, so a 1990 July and a 2024 July stay separate.
pub fn monthly_summary(records: &[TemperatureRecord]) -> Vec<MonthlyTemperature> {
    let mut months: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();

    for record in records {
        let acc = months
            .entry((record.date.year(), record.date.month()))
            .or_default();
        acc.days += 1;
        if let Some(avg) = record.avg {
            acc.avg_sum += avg;
            acc.avg_count += 1;
        }
        if let Some(max) = record.max {
            acc.max = Some(acc.max.map_or(max, |m| m.max(max)));
        }
        if let Some(min) = record.min {
            acc.min = Some(acc.min.map_or(min, |m| m.min(min)));
        }
    }

    months
        .into_iter()
        .map(|((year, month), acc)| MonthlyTemperature {
            days: acc.days,
            mean_avg: (acc.avg_count > 0).then(|| acc.avg_sum / acc.avg_count as f64),
            max: acc.max,
            min: acc.min,
            ..MonthlyTemperature::empty(year, month)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Max Temperature,Min Temperature,Avg Temperature
2024-01-01,66,44,55
2024-01-02,70,46,58
2024-02-01,72,48,
2024-07-15,115,90,102.5
";

    #[test]
    fn test_parse_dataset_reads_all_rows() {
        let dataset = parse_dataset(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.records[0].max, Some(66.0));
        assert_eq!(dataset.records[2].avg, None);
        assert_eq!(dataset.records[3].avg, Some(102.5));
    }

    #[test]
    fn test_parse_dataset_accepts_short_headers_and_us_dates() {
        let text = "Date, Max Temp ,Min Temp,Avg Temp\n12/01/1990,70,41,55.5\n";
        let dataset = parse_dataset(text).unwrap();
        assert_eq!(
            dataset.records[0].date,
            NaiveDate::from_ymd_opt(1990, 12, 1).unwrap()
        );
        assert_eq!(dataset.records[0].avg, Some(55.5));
    }

    #[test]
    fn test_parse_dataset_missing_column() {
        let err = parse_dataset("Date,Max Temperature\n2024-01-01,70\n").unwrap_err();
        assert_eq!(err, ComputeError::MissingColumn("Min Temperature".to_string()));
    }

    #[test]
    fn test_parse_dataset_invalid_date_reports_row() {
        let text = "Date,Max Temp,Min Temp,Avg Temp\n2024-01-01,1,2,3\nsoon,1,2,3\n";
        let err = parse_dataset(text).unwrap_err();
        assert_eq!(
            err,
            ComputeError::InvalidDate {
                row: 2,
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_parse_dataset_invalid_temperature() {
        let text = "Date,Max Temp,Min Temp,Avg Temp\n2024-01-01,hot,2,3\n";
        let err = parse_dataset(text).unwrap_err();
        assert!(matches!(err, ComputeError::InvalidTemperature { row: 1, .. }));
    }

    #[test]
    fn test_parse_dataset_skips_blank_rows() {
        let text = "Date,Max Temp,Min Temp,Avg Temp\n2024-01-01,1,2,3\n,,,\n";
        assert_eq!(parse_dataset(text).unwrap().len(), 1);
    }

    #[test]
    fn test_header_only_dataset_is_empty() {
        let dataset = parse_dataset("Date,Max Temp,Min Temp,Avg Temp\n").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.date_span().is_none());
        assert!(dataset.monthly_summary().is_empty());
    }

    #[test]
    fn test_monthly_summary_aggregates() {
        let summary = parse_dataset(SAMPLE).unwrap().monthly_summary();
        assert_eq!(summary.len(), 3);

        let january = &summary[0];
        assert_eq!(january.month_name, "Jan");
        assert_eq!(january.days, 2);
        assert_eq!(january.mean_avg, Some(56.5));
        assert_eq!(january.max, Some(70.0));
        assert_eq!(january.min, Some(44.0));

        let february = &summary[1];
        assert_eq!(february.days, 1);
        assert_eq!(february.mean_avg, None);

        assert_eq!(summary[2].month_name, "Jul");
        assert!(summary.iter().all(|m| m.year == 2024));
    }

    #[test]
    fn test_monthly_summary_keeps_years_apart() {
        let text = "\
Date,Max Temperature,Min Temperature,Avg Temperature
2024-07-01,112,92,102
1990-07-01,104,80,92
1990-01-01,64,40,52
";
        let summary = parse_dataset(text).unwrap().monthly_summary();
        let keys: Vec<_> = summary.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(keys, vec![(1990, 1), (1990, 7), (2024, 7)]);

        assert_eq!(summary[1].mean_avg, Some(92.0));
        assert_eq!(summary[2].mean_avg, Some(102.0));
        assert_eq!(summary[2].max, Some(112.0));
    }

    #[test]
    fn test_date_span() {
        let dataset = parse_dataset(SAMPLE).unwrap();
        let (first, last) = dataset.date_span().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }
}
