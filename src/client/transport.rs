//! HTTP transport
//!
//! The one suspension point of a view activation: a single GET whose body is
//! decoded as JSON.

use super::error::{FetchError, Fetched};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Performs a GET and returns the decoded JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Fetched<Value>;
}

/// `reqwest`-backed transport
///
/// Uses the client's default timeouts and never retries.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Fetched<Value> {
        tracing::info!("Fetching from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let payload: Value = serde_json::from_slice(&body)?;
        tracing::debug!(url, payload = %payload, "Data received");

        Ok(payload)
    }
}
