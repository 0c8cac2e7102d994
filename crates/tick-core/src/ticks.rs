// File: crates/tick-core/src/ticks.rs
// Summary: Selection of axis tick dates from an ascending sample series, one per qualifying month.

use std::collections::HashSet;

use crate::date::CalendarDate;
use crate::series::SamplePoint;
use crate::stride::Stride;

/// Year-month bucket a sample falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub year: i32,
    pub month: u32,
}

impl BucketKey {
    pub fn of(date: CalendarDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}

/// Months 1, 1+stride, 1+2*stride, ... of every year qualify.
#[inline]
pub fn month_qualifies(month: u32, stride: Stride) -> bool {
    (month - 1) % stride.months() == 0
}

/// Pick tick dates from `series`.
///
/// A sample becomes a tick when its month qualifies for `stride` and no earlier
/// sample of the same year-month has already produced one, so each qualifying
/// month contributes its first sample. Output keeps input order and is always
/// a subset of the input dates. The series is expected ascending; it is not
/// re-sorted here.
pub fn extract_ticks(series: &[SamplePoint], stride: Stride) -> Vec<CalendarDate> {
    let mut seen: HashSet<BucketKey> = HashSet::new();
    series
        .iter()
        .filter(|p| month_qualifies(p.date.month(), stride) && seen.insert(BucketKey::of(p.date)))
        .map(|p| p.date)
        .collect()
}
