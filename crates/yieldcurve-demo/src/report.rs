// File: crates/yieldcurve-demo/src/report.rs
// Summary: What the demo prints: series, resolved range, stride and labelled ticks (text or JSON).

use std::fmt::Write as _;

use serde::Serialize;
use tick_core::{RangeSelector, SamplePoint, Term, TimeAxis};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub series_id: String,
    pub term: String,
    pub observations: usize,
    pub latest: Option<SamplePoint>,
    pub axis: TimeAxis,
}

impl Report {
    pub fn new(term: &Term, series: &[SamplePoint], axis: TimeAxis) -> Self {
        Self {
            series_id: term.series_id.to_string(),
            term: term.label.to_string(),
            observations: series.len(),
            latest: series.last().copied(),
            axis,
        }
    }

    pub fn to_text(&self) -> String {
        let range = &self.axis.range;
        let selector = match range.selector {
            RangeSelector::Preset(p) => p.label(),
            RangeSelector::Custom => "custom",
        };
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}) {}..{} [{}]",
            self.series_id, self.term, range.start_date, range.end_date, selector
        );
        let _ = writeln!(
            out,
            "stride {} month(s), {} tick(s) from {} observation(s)",
            self.axis.stride.months(),
            self.axis.ticks.len(),
            self.observations
        );
        if let Some(p) = self.latest {
            let _ = writeln!(out, "latest {:.2}% on {}", p.value, p.date.format_short());
        }
        for tick in &self.axis.ticks {
            let _ = writeln!(out, "  {}  {}", tick.date, tick.label);
        }
        out
    }
}
