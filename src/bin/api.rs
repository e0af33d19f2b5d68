//! OctoFit demo API server
//!
//! Run with: cargo run --bin octofit-api
//!
//! # Configuration
//!
//! Reads the `[server]` and `[logging]` sections of the OctoFit config.
//! Environment variables:
//! - `OCTOFIT_SERVER_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OCTOFIT_SERVER_PORT`: Port to listen on (default: 8000)
//! - `OCTOFIT_PAGINATE`: Wrap collections in a paginated envelope (default: false)
//! - `OCTOFIT_MEMBERS_AS_TEXT`: Send team members as JSON text (default: false)
//! - `RUST_LOG`: Log filter (default: octofit=info)

use octofit::config::Config;
use octofit::server::{serve, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    octofit::logging::init(&config.logging);

    tracing::info!("Starting OctoFit demo API v{}", env!("CARGO_PKG_VERSION"));

    let mut server_config = ServerConfig::from(&config.server);
    if let Some(paginate) = env_flag("OCTOFIT_PAGINATE") {
        server_config.paginate = paginate;
    }
    if let Some(as_text) = env_flag("OCTOFIT_MEMBERS_AS_TEXT") {
        server_config.encode_members_as_text = as_text;
    }

    tracing::info!(
        paginate = server_config.paginate,
        members_as_text = server_config.encode_members_as_text,
        "Serving seeded fixtures"
    );

    serve(server_config).await?;
    Ok(())
}

/// Parse a boolean environment flag
fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|s| s.to_lowercase() != "false" && s != "0")
}
