// File: crates/tick-core/src/lib.rs
// Summary: Core library entry point; exports the date-range, stride, tick and label API.

pub mod axis;
pub mod clock;
pub mod date;
pub mod error;
pub mod format;
pub mod orders;
pub mod range;
pub mod series;
pub mod stride;
pub mod terms;
pub mod ticks;

pub use axis::{AxisTick, TimeAxis};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::CalendarDate;
pub use error::{DateError, OrderError, RangeError, SeriesError};
pub use format::{format_currency, format_tick, format_timestamp};
pub use orders::{Order, OrderBook, OrderRequest, OrderSubmitter};
pub use range::{resolve, RangePreset, RangeSelector, TimeRange};
pub use series::{collect_observations, is_ascending, latest_value, parse_observation, SamplePoint};
pub use stride::{select_stride, span_months, LabelGranularity, Stride};
pub use terms::{Term, YieldCurve, YieldPoint, TERMS};
pub use ticks::extract_ticks;
