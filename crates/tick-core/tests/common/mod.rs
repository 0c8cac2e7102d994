// File: crates/tick-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests (pinned clock, date/series builders).

#![allow(dead_code)]

use tick_core::{CalendarDate, FixedClock, SamplePoint};

pub fn d(s: &str) -> CalendarDate {
    CalendarDate::parse(s).expect("fixture date")
}

/// "Today" used by the fixed-date scenarios.
pub fn pinned_clock() -> FixedClock {
    FixedClock::new(d("2025-02-20"))
}

pub fn samples(dates: &[&str]) -> Vec<SamplePoint> {
    dates
        .iter()
        .enumerate()
        .map(|(i, s)| SamplePoint::new(d(s), 4.5 + i as f64 * 0.1))
        .collect()
}

pub fn dates(ds: &[CalendarDate]) -> Vec<String> {
    ds.iter().map(|d| d.to_string()).collect()
}
