//! Data models for the forecast service

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// A single income or expense record as sent by the client
///
/// `type` is kept as the raw string so that unknown values still deserialize;
/// they are skipped when averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Milliseconds since the Unix epoch
    pub occurred_at: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(occurred_at: i64, kind: TransactionKind, amount: f64) -> Self {
        Self {
            occurred_at,
            kind: kind.as_str().to_string(),
            amount,
        }
    }

    /// Parsed kind, `None` for anything other than an exact "income"/"expense"
    pub fn kind(&self) -> Option<TransactionKind> {
        self.kind.parse().ok()
    }

    pub fn occurred_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.occurred_at)
    }
}

/// Body of `POST /forecast`
///
/// Only a JSON object deserializes into a request; the positional array form
/// that derived impls also accept is rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRequest {
    pub transactions: Vec<Transaction>,
    /// Requested forecast period in months. Accepted but not used.
    pub horizon_months: i64,
}

fn default_horizon_months() -> i64 {
    1
}

impl<'de> Deserialize<'de> for ForecastRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ForecastRequestVisitor)
    }
}

struct ForecastRequestVisitor;

impl<'de> Visitor<'de> for ForecastRequestVisitor {
    type Value = ForecastRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a forecast request object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut transactions: Option<Vec<Transaction>> = None;
        let mut horizon_months: Option<i64> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "transactions" => {
                    if transactions.is_some() {
                        return Err(de::Error::duplicate_field("transactions"));
                    }
                    transactions = Some(map.next_value()?);
                }
                "horizon_months" => {
                    if horizon_months.is_some() {
                        return Err(de::Error::duplicate_field("horizon_months"));
                    }
                    horizon_months = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let transactions = transactions
            .ok_or_else(|| <A::Error as de::Error>::missing_field("transactions"))?;

        Ok(ForecastRequest {
            transactions,
            horizon_months: horizon_months.unwrap_or_else(default_horizon_months),
        })
    }
}

impl ForecastRequest {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            horizon_months: default_horizon_months(),
        }
    }

    /// Parse a request from JSON, accepting either the full request object or
    /// a bare array of transactions
    pub fn from_json_str(input: &str) -> Result<Self> {
        let parsed = match input.trim_start().as_bytes().first() {
            Some(b'[') => ForecastRequest::new(serde_json::from_str::<Vec<Transaction>>(input)?),
            _ => serde_json::from_str::<ForecastRequest>(input)?,
        };

        Ok(parsed)
    }
}

/// Forecast result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub predicted_expense: f64,
    pub predicted_income: f64,
    #[serde(default)]
    pub notes: Vec<String>,
}
