// File: crates/tick-core/src/error.rs
// Summary: Error enums for date parsing, range queries, observation cleanup and orders.

use thiserror::Error;

/// Rejected `YYYY-MM-DD` input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date '{0}'; expected YYYY-MM-DD")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("both start and end are required when specifying a custom range")]
    MissingBound,
    #[error("invalid start date; expected YYYY-MM-DD")]
    InvalidStart,
    #[error("invalid end date; expected YYYY-MM-DD")]
    InvalidEnd,
    #[error("end date cannot be in the future")]
    EndInFuture,
    #[error("end date must be after start date")]
    EndNotAfterStart,
    #[error("unknown range preset '{0}'; expected 1Y, 5Y or 10Y")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("invalid value '{value}' on {date}")]
    Value { date: String, value: String },
    #[error("no valid observations")]
    NoObservations,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("unknown term '{0}'")]
    UnknownTerm(String),
    /// Failure reported by the submission collaborator; the message is shown as-is.
    #[error("{0}")]
    Rejected(String),
}
