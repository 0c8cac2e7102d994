// File: crates/tick-core/src/format.rs
// Summary: Text formatting for tick labels, timestamps and USD amounts (en-US only).

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::date::CalendarDate;
use crate::stride::{LabelGranularity, Stride};

/// Render a tick label whose detail matches the stride tier:
/// year only for strides of a year or more, `"Jun 24"` from a quarter up,
/// otherwise the month abbreviation alone.
pub fn format_tick(date: CalendarDate, stride: Stride) -> String {
    let pattern = match stride.granularity() {
        LabelGranularity::Year => "%Y",
        LabelGranularity::MonthYear => "%b %y",
        LabelGranularity::Month => "%b",
    };
    date.naive().format(pattern).to_string()
}

/// `"Feb 14, 06:30 PM"`, in the timestamp's own offset.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.format("%b %-d, %I:%M %p").to_string()
}

/// Whole US dollars with thousands separators, e.g. `"$1,235"` for 1234.99.
/// Halves round away from zero.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.abs().round();
    let sign = if amount < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{rounded:.0}")))
}

fn group_thousands(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
