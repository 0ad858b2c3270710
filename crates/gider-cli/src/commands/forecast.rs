//! Offline forecast command

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use gider_core::{forecast, ForecastRequest, ForecastResponse};

/// Read a request file and compute its forecast
pub fn run_forecast_file(file: &Path) -> Result<ForecastResponse> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let request = ForecastRequest::from_json_str(&contents)
        .with_context(|| format!("Invalid forecast request in {}", file.display()))?;

    debug!(
        transactions = request.transactions.len(),
        horizon_months = request.horizon_months,
        "Loaded forecast request"
    );

    Ok(forecast(&request))
}

pub fn cmd_forecast(file: &Path, pretty: bool) -> Result<()> {
    let response = run_forecast_file(file)?;

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
