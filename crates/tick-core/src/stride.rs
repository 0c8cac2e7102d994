// File: crates/tick-core/src/stride.rs
// Summary: Label stride (months between axis labels) and its selection from a range span.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;
use tracing::debug;

use crate::range::TimeRange;

/// Average month length used to turn a day span into months.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Upper bounds (inclusive, in approximate months) of the first three tiers.
const MONTHLY_MAX_SPAN: f64 = 18.0;
const QUARTERLY_MAX_SPAN: f64 = 36.0;
const SEMIANNUAL_MAX_SPAN: f64 = 72.0;

/// Number of months between adjacent axis labels. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub struct Stride(NonZeroU32);

const fn stride_of(months: u32) -> Stride {
    match NonZeroU32::new(months) {
        Some(n) => Stride(n),
        None => panic!("stride must be positive"),
    }
}

impl Stride {
    pub const MONTHLY: Stride = stride_of(1);
    pub const QUARTERLY: Stride = stride_of(3);
    pub const SEMIANNUAL: Stride = stride_of(6);
    pub const ANNUAL: Stride = stride_of(12);

    /// Any positive month count; `None` for zero.
    pub const fn new(months: u32) -> Option<Self> {
        match NonZeroU32::new(months) {
            Some(n) => Some(Stride(n)),
            None => None,
        }
    }

    pub const fn months(self) -> u32 { self.0.get() }

    /// Label detail appropriate for this stride.
    pub const fn granularity(self) -> LabelGranularity {
        match self.0.get() {
            m if m >= 12 => LabelGranularity::Year,
            m if m >= 3 => LabelGranularity::MonthYear,
            _ => LabelGranularity::Month,
        }
    }
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.months())
    }
}

impl From<Stride> for u32 {
    fn from(s: Stride) -> Self { s.months() }
}

/// How much of a date a tick label shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelGranularity {
    /// `"2024"`
    Year,
    /// `"Jun 24"`
    MonthYear,
    /// `"Jun"`
    Month,
}

/// Approximate span of `range` in months (days / 30.44).
pub fn span_months(range: &TimeRange) -> f64 {
    range.span_days() as f64 / DAYS_PER_MONTH
}

/// Pick the label stride for `range`: wider ranges get coarser labels.
pub fn select_stride(range: &TimeRange) -> Stride {
    let months = span_months(range);
    let stride = if months <= MONTHLY_MAX_SPAN {
        Stride::MONTHLY
    } else if months <= QUARTERLY_MAX_SPAN {
        Stride::QUARTERLY
    } else if months <= SEMIANNUAL_MAX_SPAN {
        Stride::SEMIANNUAL
    } else {
        Stride::ANNUAL
    };
    debug!(span_months = months, stride = stride.months(), "selected tick stride");
    stride
}
