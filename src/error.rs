//! Error type for the storage layer.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the handlers map "the
//! referenced id does not exist" to 400 while every other storage failure
//! maps to 500. The status mapping is a pure function of the variant tag —
//! never string matching on error text. Both variants carry the
//! human-readable message that becomes the response body.

use std::fmt;

/// Errors returned by `TodoStore` implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced todo id does not exist.
    NotFound(String),

    /// Any other storage failure (connection, query, decode, ...).
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(msg) | StoreError::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
