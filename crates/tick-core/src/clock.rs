// File: crates/tick-core/src/clock.rs
// Summary: Injected "current date" provider; system-backed and fixed implementations.

use chrono::Local;

use crate::date::CalendarDate;

/// Source of "today" for range resolution.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Local calendar date from the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl FixedClock {
    pub const fn new(today: CalendarDate) -> Self { Self(today) }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate { self.0 }
}
