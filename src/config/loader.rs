//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(e) => write!(f, "Environment error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// Starts from defaults, applies the optional TOML file, then environment
/// overrides (`PORT`, `MONGO_URI`). `require_store` is false when the server
/// runs against the in-memory store and no connection string is needed.
pub fn load_config(path: Option<&Path>, require_store: bool) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    validate_config(&config, require_store).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut ServiceConfig) -> Result<(), ConfigError> {
    if let Ok(port) = env::var("PORT") {
        config.listener.port = port
            .parse()
            .map_err(|_| ConfigError::Env(format!("PORT is not a valid port number: {port}")))?;
    }
    if let Ok(uri) = env::var("MONGO_URI") {
        config.store.connection_string = Some(uri);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global; each test uses its own
    // variable state and the suite runs these serially via a lock.
    use std::sync::Mutex;
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("PORT", "8080");
        env::set_var("MONGO_URI", "mongodb://db:27017");

        let config = load_config(None, true).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(
            config.store.connection_string.as_deref(),
            Some("mongodb://db:27017")
        );

        env::remove_var("PORT");
        env::remove_var("MONGO_URI");
    }

    #[test]
    fn malformed_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("PORT", "not-a-port");
        env::set_var("MONGO_URI", "mongodb://db:27017");

        let err = load_config(None, true).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));

        env::remove_var("PORT");
        env::remove_var("MONGO_URI");
    }

    #[test]
    fn missing_connection_string_fails_validation() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("MONGO_URI");

        let err = load_config(None, true).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn memory_mode_needs_no_connection_string() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("MONGO_URI");

        let config = load_config(None, false).unwrap();
        assert!(config.store.connection_string.is_none());
    }
}
