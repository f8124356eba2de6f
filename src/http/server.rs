//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::issues::handlers::issues_router;
use crate::store::IssueStore;

/// Application state injected into handlers.
///
/// The store handle is the only shared state; it is constructed once in the
/// composition root and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IssueStore>,
}

/// HTTP server for the issue service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: &ServiceConfig, store: Arc<dyn IssueStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(welcome))
            .route("/health", get(health))
            .merge(issues_router())
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(CorsLayer::permissive())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for serving without signal handling (tests).
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn welcome() -> &'static str {
    "Welcome to the Local Issue Reporting API!"
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    store: String,
}

/// Liveness plus store reachability. Always 200; a broken store is reported
/// in the body, not as a transport failure.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    match state.store.ping().await {
        Ok(()) => Json(HealthStatus {
            status: "ok",
            store: "ok".to_string(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Store unreachable during health check");
            Json(HealthStatus {
                status: "degraded",
                store: e.to_string(),
            })
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
