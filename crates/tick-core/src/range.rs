// File: crates/tick-core/src/range.rs
// Summary: Range presets and resolution of preset/custom requests into concrete date bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::date::CalendarDate;
use crate::error::RangeError;

/// Named relative range ending today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "10Y")]
    TenYears,
}

impl RangePreset {
    /// Presets in the order they are offered to the user.
    pub const ALL: [RangePreset; 3] = [RangePreset::OneYear, RangePreset::FiveYears, RangePreset::TenYears];

    pub const fn years(self) -> u32 {
        match self {
            RangePreset::OneYear => 1,
            RangePreset::FiveYears => 5,
            RangePreset::TenYears => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RangePreset::OneYear => "1Y",
            RangePreset::FiveYears => "5Y",
            RangePreset::TenYears => "10Y",
        }
    }

    /// `[today - years, today]`, tagged with this preset.
    pub fn resolve(self, clock: &dyn Clock) -> TimeRange {
        let end_date = clock.today();
        let start_date = end_date.years_before(self.years());
        debug!(preset = self.label(), %start_date, %end_date, "resolved preset range");
        TimeRange { selector: RangeSelector::Preset(self), start_date, end_date }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangePreset {
    type Err = RangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangePreset::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RangeError::UnknownPreset(s.to_string()))
    }
}

/// How a [`TimeRange`] was chosen: a named preset or an explicit pair of dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangeSelector {
    Preset(RangePreset),
    Custom,
}

impl From<RangeSelector> for String {
    fn from(s: RangeSelector) -> Self {
        match s {
            RangeSelector::Preset(p) => p.label().to_string(),
            RangeSelector::Custom => "custom".to_string(),
        }
    }
}

impl TryFrom<String> for RangeSelector {
    type Error = RangeError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.eq_ignore_ascii_case("custom") {
            Ok(RangeSelector::Custom)
        } else {
            s.parse().map(RangeSelector::Preset)
        }
    }
}

/// Concrete inclusive date bounds.
/// Contract: `start_date <= end_date`. Preset ranges are pinned to the day they
/// were resolved and are not re-checked against the clock afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(rename = "preset")]
    pub selector: RangeSelector,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
}

/// Resolve a preset against `clock`.
pub fn resolve(preset: RangePreset, clock: &dyn Clock) -> TimeRange {
    preset.resolve(clock)
}

impl TimeRange {
    /// Explicit range from a date picker. The caller guarantees `start <= end`.
    pub fn custom(start_date: CalendarDate, end_date: CalendarDate) -> Self {
        Self { selector: RangeSelector::Custom, start_date, end_date }
    }

    /// Custom range accepted only if it ends no later than today and strictly after `start_date`.
    pub fn checked_custom(
        start_date: CalendarDate,
        end_date: CalendarDate,
        clock: &dyn Clock,
    ) -> Result<Self, RangeError> {
        if end_date > clock.today() {
            return Err(RangeError::EndInFuture);
        }
        if end_date <= start_date {
            return Err(RangeError::EndNotAfterStart);
        }
        Ok(Self::custom(start_date, end_date))
    }

    /// Build a range from optional `start`/`end` query values.
    /// Neither given: the one-year preset. Only one given: error.
    pub fn from_query(start: Option<&str>, end: Option<&str>, clock: &dyn Clock) -> Result<Self, RangeError> {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());
        match (start, end) {
            (None, None) => Ok(RangePreset::OneYear.resolve(clock)),
            (Some(s), Some(e)) => {
                let start_date = CalendarDate::parse(s).map_err(|_| RangeError::InvalidStart)?;
                let end_date = CalendarDate::parse(e).map_err(|_| RangeError::InvalidEnd)?;
                Self::checked_custom(start_date, end_date, clock)
            }
            _ => Err(RangeError::MissingBound),
        }
    }

    pub fn is_custom(&self) -> bool { matches!(self.selector, RangeSelector::Custom) }

    pub fn preset(&self) -> Option<RangePreset> {
        match self.selector {
            RangeSelector::Preset(p) => Some(p),
            RangeSelector::Custom => None,
        }
    }

    pub fn span_days(&self) -> i64 { self.start_date.days_until(self.end_date) }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
