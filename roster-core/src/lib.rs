//! roster-core: domain types for the employee tool server
//!
//! Transport-free building blocks shared by the serving crate:
//! employee records, input validation, page windows, and database
//! configuration sourced from the environment. Nothing in this crate
//! talks to the network or the database.

pub mod config;
pub mod employee;
pub mod page;

pub use config::{ConfigError, DbConfig};
pub use employee::{EmployeeRecord, NewEmployee, ValidatedEmployee, ValidationError};
pub use page::Page;
