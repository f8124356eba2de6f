//! Local Issue Reporting Service Library

pub mod config;
pub mod error;
pub mod http;
pub mod issues;
pub mod store;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use http::HttpServer;
pub use store::{IssueStore, MemoryIssueStore, MongoIssueStore};
