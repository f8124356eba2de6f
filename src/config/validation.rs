//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, port valid)
//! - Require a connection string when the Mongo store is in use
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingConnectionString,
    EmptyConnectionString,
    EmptyHost,
    ZeroPort,
    ZeroTimeout,
    EmptyDatabase,
    EmptyCollection,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingConnectionString => {
                write!(f, "store connection string is required (set MONGO_URI)")
            }
            ValidationError::EmptyConnectionString => {
                write!(f, "store connection string is empty")
            }
            ValidationError::EmptyHost => write!(f, "listener host is empty"),
            ValidationError::ZeroPort => write!(f, "listener port must be non-zero"),
            ValidationError::ZeroTimeout => write!(f, "request timeout must be non-zero"),
            ValidationError::EmptyDatabase => write!(f, "store database name is empty"),
            ValidationError::EmptyCollection => write!(f, "store collection name is empty"),
        }
    }
}

/// Validate a loaded configuration, collecting every failure.
pub fn validate_config(
    config: &ServiceConfig,
    require_store: bool,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.store.database.is_empty() {
        errors.push(ValidationError::EmptyDatabase);
    }
    if config.store.collection.is_empty() {
        errors.push(ValidationError::EmptyCollection);
    }
    if require_store {
        match config.store.connection_string.as_deref() {
            None => errors.push(ValidationError::MissingConnectionString),
            Some("") => errors.push(ValidationError::EmptyConnectionString),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
