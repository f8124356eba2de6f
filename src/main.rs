//! Local Issue Reporting Service
//!
//! A minimal HTTP service exposing CRUD operations over issue reports
//! persisted in MongoDB.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │               ISSUE SERVICE                 │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌────────┐ │
//!   ─────────────────┼─▶│  http   │───▶│  issues  │───▶│ store  │─┼──▶ MongoDB
//!                    │  │ server  │    │ handlers │    │ client │ │
//!                    │  └─────────┘    └──────────┘    └────────┘ │
//!                    │                                             │
//!                    │  ┌─────────────────────────────────────┐   │
//!                    │  │        Cross-Cutting Concerns        │   │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌─────────┐ │   │
//!                    │  │  │ config │ │ tracing │ │ errors  │ │   │
//!                    │  │  └────────┘ └─────────┘ └─────────┘ │   │
//!                    │  └─────────────────────────────────────┘   │
//!                    └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use issue_service::config::load_config;
use issue_service::http::HttpServer;
use issue_service::store::{IssueStore, MemoryIssueStore, MongoIssueStore};

#[derive(Parser)]
#[command(name = "issue-service")]
#[command(about = "Local issue reporting HTTP service", long_about = None)]
struct Cli {
    /// Optional TOML config file; PORT and MONGO_URI override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run against an in-memory store instead of MongoDB.
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issue_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("issue-service v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config(cli.config.as_deref(), !cli.memory) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration rejected");
            return Err(e.into());
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        database = %config.store.database,
        collection = %config.store.collection,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let store: Arc<dyn IssueStore> = if cli.memory {
        tracing::warn!("Using in-memory store; records do not survive restarts");
        Arc::new(MemoryIssueStore::new())
    } else {
        let uri = config
            .store
            .connection_string
            .clone()
            .ok_or("MONGO_URI is required")?;
        let store = MongoIssueStore::connect(&uri, &config.store).await?;

        // The client connects lazily; probe once so operators see the
        // connection state in the startup log.
        match store.ping().await {
            Ok(()) => tracing::info!("MongoDB connected successfully"),
            Err(e) => tracing::warn!(
                error = %e,
                "MongoDB unreachable at startup; requests will fail until it returns"
            ),
        }
        Arc::new(store)
    };

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(&config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
