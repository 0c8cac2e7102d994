// File: crates/tick-core/tests/ticks.rs
// Purpose: Tick extraction: month qualification, first-occurrence dedup and ordering.

mod common;

use std::collections::HashSet;

use common::{d, dates, samples};
use tick_core::ticks::month_qualifies;
use tick_core::{extract_ticks, SamplePoint, Stride};

const JAN_TO_APR: [&str; 5] = ["2024-01-05", "2024-01-20", "2024-02-10", "2024-03-15", "2024-04-01"];

#[test]
fn monthly_stride_keeps_first_sample_per_month() {
    let ticks = extract_ticks(&samples(&JAN_TO_APR), Stride::MONTHLY);
    assert_eq!(dates(&ticks), ["2024-01-05", "2024-02-10", "2024-03-15", "2024-04-01"]);
}

#[test]
fn quarterly_stride_keeps_jan_apr_jul_oct() {
    let ticks = extract_ticks(&samples(&JAN_TO_APR), Stride::QUARTERLY);
    assert_eq!(dates(&ticks), ["2024-01-05", "2024-04-01"]);
}

#[test]
fn empty_series_gives_no_ticks() {
    for m in [1, 3, 6, 12, 5] {
        assert!(extract_ticks(&[], Stride::new(m).unwrap()).is_empty());
    }
}

#[test]
fn same_month_in_different_years_are_separate_buckets() {
    let series = samples(&["2023-01-10", "2023-01-11", "2023-07-01", "2024-01-03", "2024-01-04"]);
    let ticks = extract_ticks(&series, Stride::ANNUAL);
    assert_eq!(dates(&ticks), ["2023-01-10", "2024-01-03"]);
}

#[test]
fn first_sample_wins_even_late_in_month() {
    let series = samples(&["2024-01-31", "2024-02-01", "2024-02-02"]);
    assert_eq!(dates(&extract_ticks(&series, Stride::MONTHLY)), ["2024-01-31", "2024-02-01"]);
}

#[test]
fn missing_months_are_not_synthesized() {
    let series = samples(&["2024-01-02", "2024-05-02", "2024-07-15", "2024-12-01"]);
    assert_eq!(dates(&extract_ticks(&series, Stride::SEMIANNUAL)), ["2024-01-02", "2024-07-15"]);
    assert_eq!(dates(&extract_ticks(&series, Stride::QUARTERLY)), ["2024-01-02", "2024-07-15"]);
}

#[test]
fn stride_not_dividing_twelve_restarts_each_year() {
    let monthly: Vec<String> = (1..=12).map(|m| format!("2024-{m:02}-01")).chain(["2025-01-01".into()]).collect();
    let refs: Vec<&str> = monthly.iter().map(String::as_str).collect();
    let ticks = extract_ticks(&samples(&refs), Stride::new(5).unwrap());
    assert_eq!(dates(&ticks), ["2024-01-01", "2024-06-01", "2024-11-01", "2025-01-01"]);
}

#[test]
fn output_follows_input_order() {
    let series = samples(&["2024-03-01", "2024-01-01", "2024-03-02"]);
    assert_eq!(dates(&extract_ticks(&series, Stride::MONTHLY)), ["2024-03-01", "2024-01-01"]);
}

#[test]
fn ticks_are_an_ordered_unique_subset_for_any_stride() {
    // Irregular business-day-like series with gaps of 1..=9 days over ~4 years.
    let mut series = Vec::new();
    let mut date = d("2021-01-04").naive();
    let mut step = 1u64;
    while date < d("2025-02-20").naive() {
        series.push(SamplePoint::new(date.into(), 4.0));
        step = step * 7 % 9 + 1;
        date = date.checked_add_days(chrono::Days::new(step)).unwrap();
    }
    let inputs: HashSet<_> = series.iter().map(|p| p.date).collect();

    for m in 1..=13 {
        let stride = Stride::new(m).unwrap();
        let ticks = extract_ticks(&series, stride);
        assert!(!ticks.is_empty());
        assert!(ticks.windows(2).all(|w| w[0] <= w[1]), "stride {m}: not ordered");
        assert!(ticks.iter().all(|t| inputs.contains(t)), "stride {m}: synthesized tick");
        assert!(ticks.iter().all(|t| month_qualifies(t.month(), stride)), "stride {m}: wrong month");
        let buckets: HashSet<_> = ticks.iter().map(|t| (t.year(), t.month())).collect();
        assert_eq!(buckets.len(), ticks.len(), "stride {m}: duplicate month");
    }
}
