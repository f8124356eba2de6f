//! Shared utilities for integration testing.

use std::sync::Arc;

use issue_service::config::ServiceConfig;
use issue_service::http::HttpServer;
use issue_service::store::MemoryIssueStore;

/// Serve the app on an ephemeral port backed by a fresh in-memory store.
///
/// Returns the base URL. The server task is dropped with the test runtime.
pub async fn spawn_app() -> String {
    let config = ServiceConfig::default();
    let server = HttpServer::new(&config, Arc::new(MemoryIssueStore::new()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, server.into_router()).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A complete, valid creation payload.
#[allow(dead_code)]
pub fn pothole_payload() -> serde_json::Value {
    serde_json::json!({
        "title": "Pothole",
        "description": "Large pothole on Main St",
        "location": "Main St & 5th",
    })
}
