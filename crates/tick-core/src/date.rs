// File: crates/tick-core/src/date.rs
// Summary: Date-only calendar value with strict YYYY-MM-DD text form and year arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A local calendar date with no time-of-day and no zone.
/// Contract: the text form is always the canonical `YYYY-MM-DD`, so two dates
/// compare equal exactly when their text forms do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub const fn from_naive(date: NaiveDate) -> Self { Self(date) }

    /// Parse strict `YYYY-MM-DD`; unpadded or otherwise loose forms are rejected.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let b = s.as_bytes();
        let shape_ok = b.len() == 10
            && b[4] == b'-'
            && b[7] == b'-'
            && b.iter().enumerate().all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
        if !shape_ok {
            return Err(DateError::Malformed(s.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::Malformed(s.to_string()))
    }

    pub const fn naive(&self) -> NaiveDate { self.0 }
    pub fn year(&self) -> i32 { self.0.year() }
    /// Month number, 1..=12.
    pub fn month(&self) -> u32 { self.0.month() }
    pub fn day(&self) -> u32 { self.0.day() }

    /// Whole days from `self` to `later` (negative when `later` is earlier).
    pub fn days_until(&self, later: CalendarDate) -> i64 {
        (later.0 - self.0).num_days()
    }

    /// Same month and day, `years` earlier. A Feb 29 that does not exist in
    /// the target year rolls over into Mar 1. Saturates at the earliest
    /// representable date.
    pub fn years_before(&self, years: u32) -> Self {
        let target = i32::try_from(years).ok().and_then(|y| self.year().checked_sub(y));
        let shifted = target.and_then(|year| {
            NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
                NaiveDate::from_ymd_opt(year, self.month(), 1)?
                    .checked_add_days(Days::new(u64::from(self.day() - 1)))
            })
        });
        Self(shifted.unwrap_or(NaiveDate::MIN))
    }

    /// Long-form label, e.g. `"Jan 15, 2024"`.
    pub fn format_short(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::parse(&s) }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> Self { d.to_string() }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self { Self(d) }
}
