// File: crates/tick-core/src/orders.rs
// Summary: Purchase order records, request validation and the local newest-first order list.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::OrderError;
use crate::terms::Term;

/// An order as recorded by the order service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub term: String,
    pub months: u32,
    pub amount: f64,
    /// Yield locked in when the order was created, in percent.
    #[serde(rename = "yield")]
    pub yield_pct: f64,
    pub created_at: DateTime<Utc>,
}

/// A validated purchase request: a known term label and a positive amount.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderRequest {
    term: String,
    amount: f64,
}

impl OrderRequest {
    pub fn new(term: impl Into<String>, amount: f64) -> Result<Self, OrderError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(OrderError::InvalidAmount);
        }
        let term = term.into();
        if Term::by_label(&term).is_none() {
            return Err(OrderError::UnknownTerm(term));
        }
        Ok(Self { term, amount })
    }

    pub fn term(&self) -> &str { &self.term }
    pub fn amount(&self) -> f64 { self.amount }
}

/// The side effect that actually places an order.
pub trait OrderSubmitter {
    fn submit(&mut self, request: &OrderRequest) -> Result<Order, OrderError>;
}

/// Locally held order history, newest first. Single owner; new records are
/// inserted at the front without reconciling against any in-flight fetch.
#[derive(Clone, Debug, Default)]
pub struct OrderBook {
    orders: VecDeque<Order>,
}

impl OrderBook {
    pub fn new() -> Self { Self::default() }

    /// Install a freshly fetched history (already newest first).
    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders.into();
    }

    pub fn prepend(&mut self, order: Order) {
        self.orders.push_front(order);
    }

    /// Submit `request`; on success the new record goes to the front and is
    /// returned. On failure the list is left untouched.
    pub fn submit<S>(&mut self, submitter: &mut S, request: &OrderRequest) -> Result<&Order, OrderError>
    where
        S: OrderSubmitter + ?Sized,
    {
        match submitter.submit(request) {
            Ok(order) => {
                debug!(id = %order.id, term = %order.term, amount = order.amount, "order confirmed");
                self.prepend(order);
                Ok(&self.orders[0])
            }
            Err(e) => {
                warn!(term = request.term(), error = %e, "order submission failed");
                Err(e)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ { self.orders.iter() }
    pub fn latest(&self) -> Option<&Order> { self.orders.front() }
    pub fn len(&self) -> usize { self.orders.len() }
    pub fn is_empty(&self) -> bool { self.orders.is_empty() }
}

impl From<Vec<Order>> for OrderBook {
    fn from(orders: Vec<Order>) -> Self {
        Self { orders: orders.into() }
    }
}
