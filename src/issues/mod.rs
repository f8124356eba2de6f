//! Issue domain subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract, validate payload)
//!     → store (insert/list/find/update/delete)
//!     → handlers.rs (map result to status + JSON)
//! ```

pub mod handlers;
pub mod model;

pub use handlers::issues_router;
pub use model::{Issue, IssueUpdate, NewIssue, NewIssuePayload};
