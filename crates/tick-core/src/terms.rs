// File: crates/tick-core/src/terms.rs
// Summary: Treasury term catalog and assembly of the current yield curve from per-term results.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A treasury maturity and the data-source series that tracks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub series_id: &'static str,
    pub label: &'static str,
    pub months: u32,
}

/// All supported maturities, ascending by length.
pub const TERMS: [Term; 11] = [
    Term { series_id: "DGS1MO", label: "1M", months: 1 },
    Term { series_id: "DGS3MO", label: "3M", months: 3 },
    Term { series_id: "DGS6MO", label: "6M", months: 6 },
    Term { series_id: "DGS1", label: "1Y", months: 12 },
    Term { series_id: "DGS2", label: "2Y", months: 24 },
    Term { series_id: "DGS3", label: "3Y", months: 36 },
    Term { series_id: "DGS5", label: "5Y", months: 60 },
    Term { series_id: "DGS7", label: "7Y", months: 84 },
    Term { series_id: "DGS10", label: "10Y", months: 120 },
    Term { series_id: "DGS20", label: "20Y", months: 240 },
    Term { series_id: "DGS30", label: "30Y", months: 360 },
];

/// Series shown when nothing else is selected.
pub const DEFAULT_SERIES_ID: &str = "DGS10";

impl Term {
    pub fn by_series_id(id: &str) -> Option<&'static Term> {
        TERMS.iter().find(|t| t.series_id == id)
    }

    pub fn by_label(label: &str) -> Option<&'static Term> {
        TERMS.iter().find(|t| t.label == label)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.series_id)
    }
}

/// Latest yield of one maturity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldPoint {
    pub label: String,
    pub months: u32,
    #[serde(rename = "yield")]
    pub yield_pct: f64,
}

/// Current yield curve, ascending by maturity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YieldCurve {
    pub points: Vec<YieldPoint>,
}

impl YieldCurve {
    /// Keep successful lookups, log and skip failed ones, sort by maturity.
    pub fn assemble<'a, I, E>(results: I) -> Self
    where
        I: IntoIterator<Item = (&'a Term, Result<f64, E>)>,
        E: fmt::Display,
    {
        let mut points: Vec<YieldPoint> = results
            .into_iter()
            .filter_map(|(term, res)| match res {
                Ok(y) => Some(YieldPoint { label: term.label.to_string(), months: term.months, yield_pct: y }),
                Err(e) => {
                    warn!(series = term.series_id, error = %e, "skipping term without a current yield");
                    None
                }
            })
            .collect();
        points.sort_by_key(|p| p.months);
        Self { points }
    }

    pub fn get(&self, label: &str) -> Option<&YieldPoint> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
