//! Resource fetcher
//!
//! Builds the endpoint of a resource and runs the fetch, normalize and
//! decode steps for it.

use super::error::Fetched;
use super::transport::{HttpTransport, Transport};
use crate::models::Resource;
use crate::normalize::{decode_records, normalize};
use serde_json::Value;
use std::sync::Arc;

/// Build the collection URL of a resource: `{base}/{name}/`
pub fn endpoint_url(base_url: &str, resource: &str) -> String {
    format!(
        "{}/{}/",
        base_url.trim_end_matches('/'),
        resource.trim_matches('/')
    )
}

/// Fetches collection resources from one API base URL
#[derive(Clone)]
pub struct ResourceFetcher {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ResourceFetcher {
    /// Create a fetcher using the HTTP transport
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()))
    }

    /// Create a fetcher with a custom transport
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// The API base URL (e.g. `http://localhost:8000/api`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection URL for resource `R`
    pub fn endpoint<R: Resource>(&self) -> String {
        endpoint_url(&self.base_url, R::NAME)
    }

    /// Fetch the raw payload at `url`
    pub async fn fetch_raw(&self, url: &str) -> Fetched<Value> {
        self.transport.get_json(url).await
    }

    /// Fetch, normalize and decode the collection of resource `R`
    pub async fn fetch<R: Resource>(&self) -> Fetched<Vec<R>> {
        let url = self.endpoint::<R>();
        let payload = self.fetch_raw(&url).await?;
        let records = decode_records::<R>(normalize::<R>(payload));

        tracing::debug!(resource = R::NAME, count = records.len(), "Parsed records");
        Ok(records)
    }
}

impl std::fmt::Debug for ResourceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use crate::models::{Team, User};
    use crate::server::{build_router, ServerConfig};
    use async_trait::async_trait;
    use axum::{http::StatusCode, routing::get, Router};
    use serde_json::json;

    /// Answers every request with a fixed outcome
    struct StubTransport(Fetched<Value>);

    #[async_trait]
    impl Transport for StubTransport {
        async fn get_json(&self, _url: &str) -> Fetched<Value> {
            self.0.clone()
        }
    }

    fn stub(outcome: Fetched<Value>) -> ResourceFetcher {
        ResourceFetcher::with_transport("http://api.test/api", Arc::new(StubTransport(outcome)))
    }

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://h/api", "teams"), "http://h/api/teams/");
        assert_eq!(endpoint_url("http://h/api//", "/users/"), "http://h/api/users/");

        let fetcher = ResourceFetcher::new("https://octo-8000.app.github.dev/api/");
        assert_eq!(
            fetcher.endpoint::<Team>(),
            "https://octo-8000.app.github.dev/api/teams/"
        );
    }

    #[tokio::test]
    async fn test_fetch_normalizes_stubbed_payload() {
        let fetcher = stub(Ok(json!({
            "results": [{"id": 1, "name": "Alpha", "members": "[\"a@x.com\"]"}]
        })));

        let teams = fetcher.fetch::<Team>().await.unwrap();
        assert_eq!(teams[0].members, vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_passes_failures_through() {
        let fetcher = stub(Err(FetchError::Network("unreachable".to_string())));
        let err = fetcher.fetch::<User>().await.unwrap_err();
        assert_eq!(err, FetchError::Network("unreachable".to_string()));
    }

    #[tokio::test]
    async fn test_http_not_found_is_transport_error() {
        let base = spawn_server(Router::new()).await;
        let fetcher = ResourceFetcher::new(base);

        let err = fetcher.fetch::<User>().await.unwrap_err();
        assert_eq!(err, FetchError::Transport { status: 404 });
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_http_empty_array_is_ok() {
        let router = Router::new().route("/api/users/", get(|| async { "[]" }));
        let base = spawn_server(router).await;

        let users = ResourceFetcher::new(base).fetch::<User>().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_http_invalid_body_is_decode_error() {
        let router = Router::new().route(
            "/api/users/",
            get(|| async { (StatusCode::OK, "<html>oops</html>") }),
        );
        let base = spawn_server(router).await;

        let err = ResourceFetcher::new(base).fetch::<User>().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = ResourceFetcher::new(format!("http://{}/api", addr));
        let err = fetcher.fetch::<User>().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_from_demo_server_with_encoded_members() {
        let config = ServerConfig {
            paginate: true,
            encode_members_as_text: true,
            ..ServerConfig::default()
        };
        let base = spawn_server(build_router(config)).await;

        let teams = ResourceFetcher::new(base).fetch::<Team>().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|team| team.members.len() == 6));
        assert!(teams[0].members.contains(&"iron.man@marvel.com".to_string()));
    }
}
