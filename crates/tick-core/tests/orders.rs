// File: crates/tick-core/tests/orders.rs
// Purpose: Order request validation, newest-first order list merging and the term catalog.

use chrono::{TimeZone, Utc};
use serde_json::json;
use tick_core::{Order, OrderBook, OrderError, OrderRequest, OrderSubmitter, Term, YieldCurve, TERMS};

fn order(id: &str, term: &str, amount: f64) -> Order {
    let t = Term::by_label(term).unwrap();
    Order {
        id: id.to_string(),
        term: term.to_string(),
        months: t.months,
        amount,
        yield_pct: 4.25,
        created_at: Utc.with_ymd_and_hms(2025, 2, 20, 15, 0, 0).unwrap(),
    }
}

/// Accepts every request, numbering orders as it goes.
struct Accepting {
    next: u32,
}

impl OrderSubmitter for Accepting {
    fn submit(&mut self, request: &OrderRequest) -> Result<Order, OrderError> {
        self.next += 1;
        Ok(order(&format!("ord-{}", self.next), request.term(), request.amount()))
    }
}

struct Failing;

impl OrderSubmitter for Failing {
    fn submit(&mut self, _request: &OrderRequest) -> Result<Order, OrderError> {
        Err(OrderError::Rejected("Failed to submit order: 502".into()))
    }
}

#[test]
fn request_requires_positive_amount() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        assert_eq!(OrderRequest::new("10Y", bad), Err(OrderError::InvalidAmount));
    }
    assert_eq!(OrderError::InvalidAmount.to_string(), "Enter a valid amount");
}

#[test]
fn request_requires_known_term() {
    assert_eq!(OrderRequest::new("4Y", 100.0), Err(OrderError::UnknownTerm("4Y".into())));
    let req = OrderRequest::new("10Y", 2500.0).unwrap();
    assert_eq!((req.term(), req.amount()), ("10Y", 2500.0));
}

#[test]
fn successful_submit_goes_to_the_front() {
    let mut book = OrderBook::from(vec![order("old-2", "2Y", 10.0), order("old-1", "1Y", 20.0)]);
    let mut submitter = Accepting { next: 0 };

    let req = OrderRequest::new("5Y", 1000.0).unwrap();
    let created = book.submit(&mut submitter, &req).unwrap();
    assert_eq!(created.id, "ord-1");
    assert_eq!(created.months, 60);

    book.submit(&mut submitter, &OrderRequest::new("30Y", 50.0).unwrap()).unwrap();
    let ids: Vec<&str> = book.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["ord-2", "ord-1", "old-2", "old-1"]);
    assert_eq!(book.latest().map(|o| o.term.as_str()), Some("30Y"));
}

#[test]
fn failed_submit_leaves_list_untouched() {
    let mut book = OrderBook::new();
    book.replace(vec![order("a", "3M", 10.0)]);
    let err = book.submit(&mut Failing, &OrderRequest::new("3M", 10.0).unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to submit order: 502");
    assert_eq!(book.len(), 1);
}

#[test]
fn replace_then_prepend() {
    let mut book = OrderBook::new();
    assert!(book.is_empty());
    book.replace(vec![order("b", "1M", 1.0), order("a", "1M", 1.0)]);
    book.prepend(order("c", "6M", 3.0));
    let ids: Vec<&str> = book.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
}

#[test]
fn order_json_matches_service_shape() {
    let raw = json!({
        "id": "9f1c",
        "term": "10Y",
        "months": 120,
        "amount": 5000.0,
        "yield": 4.43,
        "createdAt": "2025-02-20T15:04:05Z"
    });
    let o: Order = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(o.yield_pct, 4.43);
    assert_eq!(o.created_at, Utc.with_ymd_and_hms(2025, 2, 20, 15, 4, 5).unwrap());
    let back = serde_json::to_value(&o).unwrap();
    assert_eq!(back["createdAt"], raw["createdAt"]);
    assert_eq!(back["yield"], raw["yield"]);
}

#[test]
fn term_catalog_lookups() {
    assert_eq!(Term::by_series_id("DGS10").map(|t| t.label), Some("10Y"));
    assert_eq!(Term::by_label("1M").map(|t| t.series_id), Some("DGS1MO"));
    assert!(Term::by_series_id("DGS4").is_none());
    assert!(TERMS.windows(2).all(|w| w[0].months < w[1].months));
}

#[test]
fn curve_skips_failures_and_sorts_by_maturity() {
    let lookup = |id: &str| Term::by_series_id(id).unwrap();
    let results: Vec<(&Term, Result<f64, String>)> = vec![
        (lookup("DGS30"), Ok(4.71)),
        (lookup("DGS1MO"), Ok(4.33)),
        (lookup("DGS5"), Err("timeout".into())),
        (lookup("DGS2"), Ok(4.27)),
    ];
    let curve = YieldCurve::assemble(results);
    let labels: Vec<&str> = curve.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["1M", "2Y", "30Y"]);
    assert_eq!(curve.get("2Y").map(|p| p.yield_pct), Some(4.27));
    assert!(curve.get("5Y").is_none());
    assert_eq!(curve.len(), 3);
}
