//! qb-ingest library - Quest Ingestion module
//!
//! Normalizes AI-extracted quest candidates (free-text point values and
//! assignee names) into valid quest fields before the quest creation flow
//! persists them. Stateless: nothing here stores data.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod logging;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use services::QuestNormalizer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Normalizer configured with the default point value
    pub normalizer: Arc<QuestNormalizer>,
}

impl AppState {
    /// Create new application state
    pub fn new(normalizer: QuestNormalizer) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::quest_routes())
        .merge(api::point_routes())
        .merge(api::assignee_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the HTTP listener, returning it with the address actually bound
///
/// Port 0 binds an ephemeral port; the returned address carries the real one.
pub async fn bind_listener(
    bind: &str,
) -> anyhow::Result<(tokio::net::TcpListener, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    let addr = listener.local_addr()?;
    Ok((listener, addr))
}
