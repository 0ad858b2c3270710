//! CLI argument definitions using clap
//!
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gider - naive income/expense forecast service
#[derive(Parser)]
#[command(name = "gider")]
#[command(about = "Income/expense forecast microservice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the forecast web server
    ///
    /// Host and port default to GIDER_HOST / GIDER_PORT, then 0.0.0.0:8000.
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Run a forecast locally on a JSON file
    ///
    /// The file holds either a full request body
    /// (`{"transactions": [...], "horizon_months": 1}`) or a bare array of
    /// transactions.
    Forecast {
        /// JSON file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
}
