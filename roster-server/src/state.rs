//! Application state shared across handlers
//!
//! The store is the one service object: constructed at startup with an
//! injected connection policy, cloned cheaply into each handler.

use std::sync::Arc;

use crate::db::{ConnectionProvider, EmployeeStore, PgConnectionProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: EmployeeStore,
}

impl AppState {
    /// State with the default per-call connection policy, configured
    /// from the environment at first use.
    pub fn from_env() -> Self {
        Self::with_provider(Arc::new(PgConnectionProvider::new()))
    }

    /// State with an explicit connection policy.
    pub fn with_provider(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            store: EmployeeStore::new(provider),
        }
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }
}
