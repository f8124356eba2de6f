//! Document store subsystem.
//!
//! # Responsibilities
//! - Define the `IssueStore` seam the handlers call through
//! - MongoDB implementation for production (mongo.rs)
//! - In-memory implementation for tests and local runs (memory.rs)
//!
//! # Design Decisions
//! - One store handle built at startup, shared as `Arc<dyn IssueStore>`
//! - Every operation is a single store call; no retries, no transactions
//! - Identifier format is store-native (ObjectId hex vs UUID); a malformed
//!   ObjectId is a store error, not a not-found

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::issues::model::{Issue, IssueUpdate, NewIssue};

pub use memory::MemoryIssueStore;
pub use mongo::MongoIssueStore;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier does not parse as a store identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Driver-level failure (connectivity, server fault).
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// CRUD operations over the issue collection.
///
/// All mutable state lives behind this trait; the handlers keep no copy of
/// any record between requests.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Insert a new issue, assigning its id and creation timestamp.
    async fn insert(&self, new: NewIssue) -> Result<Issue, StoreError>;

    /// All stored issues in store-native order.
    async fn list(&self) -> Result<Vec<Issue>, StoreError>;

    /// Look up one issue. `Ok(None)` means no record with that id.
    async fn find(&self, id: &str) -> Result<Option<Issue>, StoreError>;

    /// Apply the present fields of `update` to an existing record. The id
    /// and creation timestamp are never altered. `Ok(None)` means no record
    /// with that id.
    async fn update(&self, id: &str, update: IssueUpdate) -> Result<Option<Issue>, StoreError>;

    /// Remove a record permanently. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Cheap reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
