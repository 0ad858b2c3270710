//! Gider Core Library
//!
//! Shared functionality for the Gider forecast service:
//! - Transaction and forecast request/response models
//! - Naive income/expense averaging with advisory notes
//! - Error types

pub mod error;
pub mod forecast;
pub mod models;

pub use error::{Error, Result};
pub use forecast::{advisory_notes, forecast, mean, Partition};
pub use models::{ForecastRequest, ForecastResponse, Transaction, TransactionKind};
