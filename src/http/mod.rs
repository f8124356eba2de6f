//! HTTP server subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → issues::handlers (validate, call store)
//!     → JSON response
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
