//! Income/Expense Forecast
//!
//! Very naive baseline: the predicted income and expense are the plain
//! averages of the submitted transactions of each type. Two heuristic checks
//! turn the averages into advisory notes for the client.

use tracing::{debug, Level};

use crate::models::{ForecastRequest, ForecastResponse, Transaction, TransactionKind};

/// Expenses above this share of income trigger the spending note
pub const EXPENSE_RATIO_THRESHOLD: f64 = 0.9;

pub const NOTE_EXPENSES_CLOSE_TO_INCOME: &str =
    "Expenses are close to income; consider reducing spending.";

pub const NOTE_NO_INCOME: &str = "No income detected; ensure data is complete.";

/// Transaction amounts split by kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub incomes: Vec<f64>,
    pub expenses: Vec<f64>,
    /// Transactions whose type matched neither kind
    pub ignored: usize,
}

impl Partition {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut partition = Partition::default();

        for tx in transactions {
            match tx.kind() {
                Some(TransactionKind::Income) => partition.incomes.push(tx.amount),
                Some(TransactionKind::Expense) => partition.expenses.push(tx.amount),
                None => partition.ignored += 1,
            }
        }

        partition
    }
}

/// Arithmetic mean, 0 for an empty slice
///
/// Finite amounts always give a finite mean: when the plain sum overflows,
/// each amount is scaled by the count before summing.
pub fn mean(amounts: &[f64]) -> f64 {
    if amounts.is_empty() {
        return 0.0;
    }
    let n = amounts.len() as f64;

    let sum: f64 = amounts.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }

    amounts.iter().map(|amount| amount / n).sum()
}

/// Advisory notes for a pair of averages, in fixed order
pub fn advisory_notes(avg_income: f64, avg_expense: f64) -> Vec<String> {
    let mut notes = Vec::new();

    if avg_expense > avg_income * EXPENSE_RATIO_THRESHOLD {
        notes.push(NOTE_EXPENSES_CLOSE_TO_INCOME.to_string());
    }
    if avg_income == 0.0 && avg_expense > 0.0 {
        notes.push(NOTE_NO_INCOME.to_string());
    }

    notes
}

/// Compute the forecast for a request
///
/// `horizon_months` is accepted but has no effect on the result.
pub fn forecast(request: &ForecastRequest) -> ForecastResponse {
    let partition = Partition::from_transactions(&request.transactions);

    if partition.ignored > 0 {
        debug!(
            ignored = partition.ignored,
            "Skipping transactions with unknown type"
        );
    }

    if tracing::enabled!(Level::DEBUG) {
        let span = request
            .transactions
            .iter()
            .filter_map(Transaction::occurred_at_utc)
            .fold(None, |span, at| match span {
                None => Some((at, at)),
                Some((start, end)) => Some((start.min(at), end.max(at))),
            });
        if let Some((start, end)) = span {
            debug!(
                from = %start.format("%Y-%m-%d"),
                to = %end.format("%Y-%m-%d"),
                "Forecast input period"
            );
        }
    }

    let avg_income = mean(&partition.incomes);
    let avg_expense = mean(&partition.expenses);

    ForecastResponse {
        predicted_expense: avg_expense,
        predicted_income: avg_income,
        notes: advisory_notes(avg_income, avg_expense),
    }
}
