//! Logging setup
//!
//! Installs the global `tracing` subscriber for the binaries.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives used when `RUST_LOG` is not set
pub fn default_directives(config: &LoggingConfig) -> String {
    format!("octofit={},tower_http=info", config.level)
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. A `json` format
/// emits one JSON object per event, anything else is human readable.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_to_crate() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(default_directives(&config), "octofit=debug,tower_http=info");
    }
}
