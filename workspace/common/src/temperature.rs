use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Abbreviated month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One daily row of the temperature dataset. Values are degrees Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureRecord {
    pub date: NaiveDate,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub avg: Option<f64>,
}

/// Summary of the daily records of one month of one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyTemperature {
    /// Calendar year the rows fell into
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Abbreviated month name
    pub month_name: String,
    /// Number of daily rows that fell into this month
    pub days: usize,
    /// Mean of the daily averages
    pub mean_avg: Option<f64>,
    /// Highest daily maximum
    pub max: Option<f64>,
    /// Lowest daily minimum
    pub min: Option<f64>,
}

impl MonthlyTemperature {
    pub fn empty(year: i32, month: u32) -> Self {
        let month_name = month
            .checked_sub(1)
            .and_then(|index| MONTH_NAMES.get(index as usize))
            .copied()
            .unwrap_or("???")
            .to_string();
        Self {
            year,
            month,
            month_name,
            days: 0,
            mean_avg: None,
            max: None,
            min: None,
        }
    }
}
