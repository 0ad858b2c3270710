//! CLI command tests

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands;

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ========== Forecast Command Tests ==========

#[test]
fn test_run_forecast_file_request_object() {
    let file = write_input(
        r#"{
            "transactions": [
                {"occurred_at": 1704067200000, "type": "income", "amount": 1000},
                {"occurred_at": 1704153600000, "type": "expense", "amount": 950}
            ],
            "horizon_months": 2
        }"#,
    );

    let response = commands::run_forecast_file(file.path()).unwrap();

    assert_eq!(response.predicted_income, 1000.0);
    assert_eq!(response.predicted_expense, 950.0);
    assert_eq!(response.notes.len(), 1);
}

#[test]
fn test_run_forecast_file_bare_array() {
    let file = write_input(r#"[{"occurred_at": 0, "type": "expense", "amount": 500}]"#);

    let response = commands::run_forecast_file(file.path()).unwrap();

    assert_eq!(response.predicted_income, 0.0);
    assert_eq!(response.predicted_expense, 500.0);
    assert_eq!(response.notes.len(), 2);
}

#[test]
fn test_run_forecast_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = commands::run_forecast_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_run_forecast_file_invalid_json() {
    let file = write_input(r#"{"transactions": "lots"}"#);

    let err = commands::run_forecast_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid forecast request"));
}

#[test]
fn test_cmd_forecast_prints() {
    let file = write_input(r#"{"transactions": []}"#);
    assert!(commands::cmd_forecast(file.path(), true).is_ok());
}

// ========== Serve Config Tests ==========

#[test]
fn test_resolve_server_config_flags_override() {
    let config =
        commands::resolve_server_config(Some("127.0.0.1".to_string()), Some(9001)).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9001);
    assert_eq!(config.bind_addr(), "127.0.0.1:9001");
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["gider", "serve"]).unwrap();
    match cli.command {
        Commands::Serve { port, host } => {
            assert!(port.is_none());
            assert!(host.is_none());
        }
        _ => panic!("expected serve"),
    }
    assert!(!cli.verbose);
}

#[test]
fn test_parse_forecast_args() {
    let cli = Cli::try_parse_from(["gider", "-v", "forecast", "--file", "tx.json", "--pretty"])
        .unwrap();
    match cli.command {
        Commands::Forecast { file, pretty } => {
            assert_eq!(file.to_str(), Some("tx.json"));
            assert!(pretty);
        }
        _ => panic!("expected forecast"),
    }
    assert!(cli.verbose);
}

#[test]
fn test_parse_rejects_bad_port() {
    assert!(Cli::try_parse_from(["gider", "serve", "--port", "99999"]).is_err());
}
