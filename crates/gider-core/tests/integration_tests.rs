//! Integration tests for gider-core
//!
//! These tests run JSON request bodies through parsing and forecasting the
//! way the server and CLI do.

use gider_core::{forecast, ForecastRequest, ForecastResponse};

fn run(json: &str) -> ForecastResponse {
    let request = ForecastRequest::from_json_str(json).expect("valid request");
    forecast(&request)
}

#[test]
fn test_mixed_month_of_transactions() {
    let response = run(r#"{
        "transactions": [
            {"occurred_at": 1704067200000, "type": "income", "amount": 4200.0},
            {"occurred_at": 1704153600000, "type": "expense", "amount": 1200.0},
            {"occurred_at": 1704240000000, "type": "expense", "amount": 85.5},
            {"occurred_at": 1704326400000, "type": "expense", "amount": 64.5},
            {"occurred_at": 1704412800000, "type": "transfer", "amount": 10000.0}
        ],
        "horizon_months": 3
    }"#);

    assert_eq!(response.predicted_income, 4200.0);
    assert!((response.predicted_expense - 450.0).abs() < 1e-9);
    assert!(response.notes.is_empty());
}

#[test]
fn test_no_income_response_json_shape() {
    let response = run(r#"[{"occurred_at": 0, "type": "expense", "amount": 500}]"#);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["predicted_income"], 0.0);
    assert_eq!(json["predicted_expense"], 500.0);
    assert_eq!(
        json["notes"],
        serde_json::json!([
            "Expenses are close to income; consider reducing spending.",
            "No income detected; ensure data is complete."
        ])
    );
}

#[test]
fn test_wrong_field_type_is_an_error() {
    let result = ForecastRequest::from_json_str(
        r#"{"transactions": [{"occurred_at": "yesterday", "type": "income", "amount": 1}]}"#,
    );
    assert!(matches!(result, Err(gider_core::Error::Json(_))));
}
