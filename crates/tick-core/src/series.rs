// File: crates/tick-core/src/series.rs
// Summary: Dated sample points and cleanup of raw observation rows into a usable series.
// Notes:
// - Raw rows use "." as the missing-data marker; those rows are dropped, not zeroed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::CalendarDate;
use crate::error::SeriesError;

/// Text the data source uses for "no observation on this date".
pub const MISSING_VALUE: &str = ".";

/// One observation of a time series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub date: CalendarDate,
    #[serde(alias = "yield")]
    pub value: f64,
}

impl SamplePoint {
    pub const fn new(date: CalendarDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Parse one raw `(date, value)` row. `Ok(None)` when the value is missing.
pub fn parse_observation(date: &str, value: &str) -> Result<Option<SamplePoint>, SeriesError> {
    let date_parsed = CalendarDate::parse(date.trim())?;
    let value = value.trim();
    if value == MISSING_VALUE {
        return Ok(None);
    }
    let v = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SeriesError::Value { date: date.to_string(), value: value.to_string() })?;
    Ok(Some(SamplePoint::new(date_parsed, v)))
}

/// Parse every row, keeping input order and dropping missing values.
pub fn collect_observations<I, D, V>(rows: I) -> Result<Vec<SamplePoint>, SeriesError>
where
    I: IntoIterator<Item = (D, V)>,
    D: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = Vec::new();
    for (date, value) in rows {
        match parse_observation(date.as_ref(), value.as_ref())? {
            Some(p) => out.push(p),
            None => trace!(date = date.as_ref(), "dropping missing observation"),
        }
    }
    Ok(out)
}

/// First usable value of a newest-first listing.
pub fn latest_value<I, D, V>(rows: I) -> Result<f64, SeriesError>
where
    I: IntoIterator<Item = (D, V)>,
    D: AsRef<str>,
    V: AsRef<str>,
{
    for (date, value) in rows {
        if let Some(p) = parse_observation(date.as_ref(), value.as_ref())? {
            return Ok(p.value);
        }
    }
    Err(SeriesError::NoObservations)
}

/// True when dates never decrease.
pub fn is_ascending(series: &[SamplePoint]) -> bool {
    series.windows(2).all(|w| w[0].date <= w[1].date)
}
