//! Server command implementation

use anyhow::{Context, Result};

use gider_server::ServerConfig;

/// Resolve the server configuration: flags override environment values
pub fn resolve_server_config(host: Option<String>, port: Option<u16>) -> Result<ServerConfig> {
    let mut config = ServerConfig::from_env().context("Failed to read server configuration")?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

pub async fn cmd_serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = resolve_server_config(host, port)?;

    println!("🚀 Starting Gider forecast server...");
    println!("   Listening: http://{}", config.bind_addr());
    if !config.allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} (GIDER_ALLOWED_ORIGINS)",
            config.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    gider_server::serve(config).await
}
