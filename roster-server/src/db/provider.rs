//! Connection acquisition for the employee store
//!
//! The default policy opens a fresh connection per call from
//! environment configuration. `PoolProvider` swaps in a shared pool
//! behind the same trait for deployments with steadier traffic.

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection, PgPool, Postgres};
use thiserror::Error;

use roster_core::{ConfigError, DbConfig};

/// Failure to produce a usable connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("database configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid DATABASE_URL: {source}")]
    InvalidUrl {
        #[source]
        source: sqlx::Error,
    },

    #[error("could not connect to database: {source}")]
    Connect {
        #[source]
        source: sqlx::Error,
    },
}

/// A live connection owned by a single call.
///
/// Derefs to `PgConnection` for statement execution; `release` must be
/// called on every exit path.
pub enum PgClient {
    Owned(PgConnection),
    Pooled(PoolConnection<Postgres>),
}

impl PgClient {
    /// Close an owned connection, or hand a pooled one back.
    ///
    /// Close failures are swallowed so release never raises past an
    /// earlier error.
    pub async fn release(self) {
        match self {
            PgClient::Owned(conn) => {
                if let Err(err) = conn.close().await {
                    tracing::debug!("connection close failed: {err}");
                }
            }
            PgClient::Pooled(conn) => drop(conn),
        }
    }
}

impl Deref for PgClient {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        match self {
            PgClient::Owned(conn) => conn,
            PgClient::Pooled(conn) => conn,
        }
    }
}

impl DerefMut for PgClient {
    fn deref_mut(&mut self) -> &mut PgConnection {
        match self {
            PgClient::Owned(conn) => conn,
            PgClient::Pooled(conn) => conn,
        }
    }
}

/// Yields one usable connection per call, or fails with `ConnectError`.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn acquire(&self) -> Result<PgClient, ConnectError>;
}

/// Default policy: a fresh connection per call.
///
/// Connect options are resolved from the environment once, lazily, at
/// first acquire. A broken configuration therefore surfaces as a
/// connection failure on the first call rather than aborting startup.
#[derive(Debug, Default)]
pub struct PgConnectionProvider {
    options: OnceCell<PgConnectOptions>,
}

impl PgConnectionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn options(&self) -> Result<&PgConnectOptions, ConnectError> {
        self.options.get_or_try_init(|| {
            // A full DATABASE_URL takes precedence over the DB_* parts
            if let Ok(url) = std::env::var("DATABASE_URL") {
                return url
                    .parse()
                    .map_err(|source| ConnectError::InvalidUrl { source });
            }
            let cfg = DbConfig::from_env()?;
            Ok(PgConnectOptions::new()
                .host(&cfg.host)
                .port(cfg.port)
                .database(&cfg.database)
                .username(&cfg.user)
                .password(&cfg.password))
        })
    }
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    async fn acquire(&self) -> Result<PgClient, ConnectError> {
        let options = self.options()?;
        let conn = PgConnection::connect_with(options)
            .await
            .map_err(|source| ConnectError::Connect { source })?;
        Ok(PgClient::Owned(conn))
    }
}

/// Pool-backed policy. Acquiring checks a connection out of the pool;
/// release hands it back instead of closing it.
#[derive(Debug, Clone)]
pub struct PoolProvider {
    pool: PgPool,
}

impl PoolProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionProvider for PoolProvider {
    async fn acquire(&self) -> Result<PgClient, ConnectError> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|source| ConnectError::Connect { source })?;
        Ok(PgClient::Pooled(conn))
    }
}
