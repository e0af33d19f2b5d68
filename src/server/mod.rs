//! Demo OctoFit API
//!
//! A read-only stand-in for the OctoFit backend, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/` - API root listing the collection URLs
//! - `GET /api/users/`
//! - `GET /api/teams/`
//! - `GET /api/activities/`
//! - `GET /api/workouts/`
//! - `GET /api/leaderboard/`
//!
//! The quirks the dashboard has to tolerate can be switched on: paginated
//! envelopes and team members sent as JSON text.

mod fixtures;

pub use fixtures::Fixtures;

use crate::models::ResourceKind;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Demo server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Wrap collections in a `{count, next, previous, results}` envelope
    pub paginate: bool,
    /// Send team members as JSON text instead of an array
    pub encode_members_as_text: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            paginate: false,
            encode_members_as_text: false,
        }
    }
}

impl ServerConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&crate::config::ServerSection> for ServerConfig {
    fn from(section: &crate::config::ServerSection) -> Self {
        Self {
            host: section.host.clone(),
            port: section.port,
            paginate: section.paginate,
            encode_members_as_text: section.encode_members_as_text,
        }
    }
}

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Serialization(_) | ServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        tracing::warn!(status = %status, error = %self, "Request failed");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

struct AppState {
    fixtures: Fixtures,
    config: ServerConfig,
}

impl AppState {
    fn collection(&self, kind: ResourceKind) -> Result<Vec<Value>, ServerError> {
        let records = match kind {
            ResourceKind::Users => serde_json::to_value(&self.fixtures.users)?,
            ResourceKind::Teams => serde_json::to_value(&self.fixtures.teams)?,
            ResourceKind::Activities => serde_json::to_value(&self.fixtures.activities)?,
            ResourceKind::Workouts => serde_json::to_value(&self.fixtures.workouts)?,
            ResourceKind::Leaderboard => serde_json::to_value(&self.fixtures.leaderboard)?,
        };

        let mut records = match records {
            Value::Array(items) => items,
            _ => Vec::new(),
        };

        if kind == ResourceKind::Teams && self.config.encode_members_as_text {
            for team in &mut records {
                encode_members(team)?;
            }
        }

        Ok(records)
    }
}

/// Replace a team's `members` array with its JSON text
fn encode_members(team: &mut Value) -> Result<(), ServerError> {
    if let Some(members) = team.get_mut("members") {
        let text = serde_json::to_string(members)?;
        *members = Value::String(text);
    }
    Ok(())
}

/// Build the demo router
pub fn build_router(config: ServerConfig) -> Router {
    build_router_with(config, Fixtures::seeded())
}

/// Build the demo router over a given dataset
pub fn build_router_with(config: ServerConfig, fixtures: Fixtures) -> Router {
    let state = Arc::new(AppState { fixtures, config });

    Router::new()
        .route("/api/", get(api_root))
        .route("/api/:resource/", get(list_collection))
        .route("/api/:resource", get(list_collection))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /api/
async fn api_root() -> Json<Value> {
    let links: Map<String, Value> = ResourceKind::ALL
        .iter()
        .map(|kind| (kind.name().to_string(), json!(format!("/api/{}/", kind.name()))))
        .collect();
    Json(Value::Object(links))
}

/// GET /api/:resource/
async fn list_collection(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let kind: ResourceKind = resource.parse().map_err(ServerError::NotFound)?;
    let records = state.collection(kind)?;

    tracing::debug!(resource = %kind, count = records.len(), "Serving collection");

    let body = if state.config.paginate {
        json!({
            "count": records.len(),
            "next": null,
            "previous": null,
            "results": records,
        })
    } else {
        Value::Array(records)
    };

    Ok(Json(body))
}

/// Start the demo server and run until Ctrl+C
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr();
    let router = build_router(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OctoFit demo API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("OctoFit demo API shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_api_root_lists_resources() {
        let (status, body) = get_json(build_router(ServerConfig::default()), "/api/").await;

        assert_eq!(status, StatusCode::OK);
        for kind in ResourceKind::ALL {
            assert_eq!(body[kind.name()], json!(format!("/api/{}/", kind.name())));
        }
    }

    #[tokio::test]
    async fn test_every_collection_is_served() {
        for kind in ResourceKind::ALL {
            let uri = format!("/api/{}/", kind.name());
            let (status, body) = get_json(build_router(ServerConfig::default()), &uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(!body.as_array().unwrap().is_empty(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_resource_is_not_found() {
        let (status, body) = get_json(build_router(ServerConfig::default()), "/api/badges/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("badges"));
    }

    #[tokio::test]
    async fn test_paginated_envelope() {
        let config = ServerConfig {
            paginate: true,
            ..ServerConfig::default()
        };
        let (_, body) = get_json(build_router(config), "/api/users/").await;

        assert_eq!(body["count"], json!(12));
        assert!(body["next"].is_null());
        assert_eq!(body["results"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_members_encoded_as_text() {
        let config = ServerConfig {
            encode_members_as_text: true,
            ..ServerConfig::default()
        };
        let (_, body) = get_json(build_router(config), "/api/teams").await;

        let members = body[0]["members"].as_str().unwrap();
        let decoded: Vec<String> = serde_json::from_str(members).unwrap();
        assert_eq!(decoded.len(), 6);
    }
}
