//! Server configuration
//!
//! Values come from Shuttle secrets (`Secrets.toml` locally). Every key is
//! optional; see [`ServerConfig::default`] for the fallbacks.

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

pub const LEGACY_NULL_BODY_KEY: &str = "SPORTS_LEGACY_NULL_BODY";
pub const CORS_ORIGIN_KEY: &str = "SPORTS_CORS_ORIGIN";
pub const RUN_MIGRATIONS_KEY: &str = "SPORTS_RUN_MIGRATIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("SPORTS_CORS_ORIGIN is not a valid origin: {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub legacy_null_body: bool,
    pub cors_origin: Option<HeaderValue>,
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            legacy_null_body: false,
            cors_origin: None,
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Build the config from a key lookup (secret store, env, map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let legacy_null_body = match lookup(LEGACY_NULL_BODY_KEY) {
            Some(value) => parse_bool(LEGACY_NULL_BODY_KEY, &value)?,
            None => defaults.legacy_null_body,
        };

        let run_migrations = match lookup(RUN_MIGRATIONS_KEY) {
            Some(value) => parse_bool(RUN_MIGRATIONS_KEY, &value)?,
            None => defaults.run_migrations,
        };

        let cors_origin = match lookup(CORS_ORIGIN_KEY) {
            Some(origin) if !origin.trim().is_empty() => Some(
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?,
            ),
            _ => None,
        };

        Ok(Self {
            legacy_null_body,
            cors_origin,
            run_migrations,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods(Any)
                .allow_headers(Any),
            None => CorsLayer::permissive(),
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
