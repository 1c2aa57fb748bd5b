//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Hosts load the configuration once at startup and hand it to [`crate::AppState`].

use std::env;

use crate::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_REDIS_URL, DEFAULT_SESSION_COOKIE_NAME,
    DEFAULT_SESSION_TTL_SECONDS, DEFAULT_TRUST_FORWARDED_HEADERS,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub redis: RedisConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub rust_log: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Trust `X-Forwarded-For` / `X-Real-IP` when resolving the client address.
    /// Only enable behind a reverse proxy that overwrites these headers.
    pub trust_forwarded_headers: bool,
}

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub ttl_seconds: u64,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            session: SessionConfig::from_env()?,
            redis: RedisConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                log_json: false,
                trust_forwarded_headers: DEFAULT_TRUST_FORWARDED_HEADERS,
            },
            session: SessionConfig {
                cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
                ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            },
            redis: RedisConfig {
                url: DEFAULT_REDIS_URL.to_string(),
            },
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            log_json: parse_bool("LOG_JSON", env::var("LOG_JSON").ok(), false)?,
            trust_forwarded_headers: parse_bool(
                "TRUST_FORWARDED_HEADERS",
                env::var("TRUST_FORWARDED_HEADERS").ok(),
                DEFAULT_TRUST_FORWARDED_HEADERS,
            )?,
        })
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cookie_name = env::var("SESSION_COOKIE_NAME")
            .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE_NAME.to_string());
        if cookie_name.is_empty() || cookie_name.contains([';', '=', ' ']) {
            return Err(ConfigError::InvalidValue("SESSION_COOKIE_NAME".to_string()));
        }

        Ok(Self {
            cookie_name,
            ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SESSION_TTL_SECONDS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        })
    }
}

fn parse_bool(name: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(_) => Err(ConfigError::InvalidValue(name.to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
