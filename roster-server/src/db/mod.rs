//! Database layer: connection acquisition and the employee store
//!
//! Each tool call owns exactly one connection for its entire duration.
//! The acquisition policy lives behind `ConnectionProvider` so it can
//! be swapped without touching validation or row mapping.

pub mod employees;
pub mod provider;

pub use employees::{EmployeeError, EmployeeStore, PersistenceError};
pub use provider::{
    ConnectError, ConnectionProvider, PgClient, PgConnectionProvider, PoolProvider,
};
