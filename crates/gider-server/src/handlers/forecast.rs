//! Forecast handlers

use axum::Json;
use tracing::{debug, info};

use crate::{AppError, JsonBody};
use gider_core::{ForecastRequest, ForecastResponse};

/// POST /forecast - Average income and expenses with advisory notes
///
/// `horizon_months` is accepted and logged but does not affect the result.
pub async fn post_forecast(
    JsonBody(request): JsonBody<ForecastRequest>,
) -> Json<ForecastResponse> {
    info!(
        transactions = request.transactions.len(),
        horizon_months = request.horizon_months,
        "Forecast requested"
    );

    let response = gider_core::forecast(&request);

    debug!(
        predicted_income = response.predicted_income,
        predicted_expense = response.predicted_expense,
        notes = response.notes.len(),
        "Forecast computed"
    );

    Json(response)
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
