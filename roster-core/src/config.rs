//! Database configuration sourced from the process environment
//!
//! Environment variables: `DB_HOST`, `DB_PORT` (default 5432),
//! `DB_DATABASE` (legacy fallback `DB_NAME`), `DB_USER`, `DB_PASSWORD`.
//! A missing or malformed value is a configuration error; the serving
//! crate surfaces it as a connection failure at first use rather than
//! at startup.

use thiserror::Error;

/// Default PostgreSQL port when `DB_PORT` is unset
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Configuration failure while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value '{value}' for {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// Connection parameters for the employee database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a lookup function. Tests pass a
    /// closure over a map instead of mutating the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = require(&get, "DB_HOST")?;
        // Prefer DB_DATABASE (matches docker-compose); fall back to legacy DB_NAME
        let database = get("DB_DATABASE")
            .or_else(|| get("DB_NAME"))
            .ok_or(ConfigError::MissingVar {
                name: "DB_DATABASE",
            })?;
        let user = require(&get, "DB_USER")?;
        let password = require(&get, "DB_PASSWORD")?;
        let port = match get("DB_PORT") {
            None => DEFAULT_DB_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "DB_PORT",
                    value: raw,
                })?,
        };

        Ok(Self {
            host,
            port,
            database,
            user,
            password,
        })
    }
}

fn require(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    get(name).ok_or(ConfigError::MissingVar { name })
}
