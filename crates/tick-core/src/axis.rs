// File: crates/tick-core/src/axis.rs
// Summary: Time axis model: resolved range, chosen stride and labelled ticks for the renderer.

use serde::Serialize;
use tracing::debug;

use crate::date::CalendarDate;
use crate::format::format_tick;
use crate::range::TimeRange;
use crate::series::SamplePoint;
use crate::stride::{select_stride, Stride};
use crate::ticks::extract_ticks;

/// A labelled position on the time axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub date: CalendarDate,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxis {
    pub range: TimeRange,
    pub stride: Stride,
    pub ticks: Vec<AxisTick>,
}

impl TimeAxis {
    /// Stride from `range`, ticks from `series`, one label per tick.
    pub fn build(range: &TimeRange, series: &[SamplePoint]) -> Self {
        let stride = select_stride(range);
        Self::with_stride(range, series, stride)
    }

    /// Same as [`TimeAxis::build`] with a caller-chosen stride.
    pub fn with_stride(range: &TimeRange, series: &[SamplePoint], stride: Stride) -> Self {
        let ticks: Vec<AxisTick> = extract_ticks(series, stride)
            .into_iter()
            .map(|date| AxisTick { date, label: format_tick(date, stride) })
            .collect();
        debug!(samples = series.len(), ticks = ticks.len(), stride = stride.months(), "built time axis");
        Self { range: *range, stride, ticks }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ticks.iter().map(|t| t.label.as_str())
    }

    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.ticks.iter().map(|t| t.date)
    }

    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
}
