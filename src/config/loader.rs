//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{ApiConfig, Environment};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable selecting development or production mode.
pub const ENV_VAR: &str = "APP_ENV";
/// Fallback for [`ENV_VAR`] when it is unset.
pub const NODE_ENV_VAR: &str = "NODE_ENV";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Override { var: &'static str, reason: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML configuration file. Missing sections take their defaults.
pub fn load_file(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply `PORT`, `APP_ENV` (or `NODE_ENV`) and `LOG_LEVEL` overrides.
///
/// `lookup` abstracts the environment so callers can pass `std::env::var`
/// or a fixed map in tests.
pub fn apply_env_overrides<F>(mut config: ApiConfig, lookup: F) -> Result<ApiConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_VAR) {
        config.listener.port = port.trim().parse().map_err(|e| ConfigError::Override {
            var: PORT_VAR,
            reason: format!("{}", e),
        })?;
    }

    if let Some(env) = lookup(ENV_VAR) {
        config.environment = env
            .parse::<Environment>()
            .map_err(|reason| ConfigError::Override { var: ENV_VAR, reason })?;
    } else if let Some(env) = lookup(NODE_ENV_VAR) {
        // Only an exact "development" turns detail on; other values such as "test" keep the default.
        if env.trim() == "development" {
            config.environment = Environment::Development;
        }
    }

    if let Some(level) = lookup(LOG_LEVEL_VAR) {
        config.observability.log_level = level;
    }

    Ok(config)
}

/// Build the startup configuration: defaults or file, then environment, then validation.
pub fn load_config<F>(path: Option<&Path>, lookup: F) -> Result<ApiConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(p) => load_file(p)?,
        None => ApiConfig::default(),
    };

    let config = apply_env_overrides(base, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Environment lookup backed by the real process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
