//! Employee store: the two tool operations against PostgreSQL
//!
//! Each operation acquires one connection from the injected provider,
//! runs a single statement, maps rows through a typed step, and
//! releases the connection on every exit path. Inserts are single
//! auto-committed statements with RETURNING, so no partial row can
//! survive a failure.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::FromRow;
use thiserror::Error;

use roster_core::{EmployeeRecord, NewEmployee, Page, ValidatedEmployee, ValidationError};

use super::provider::{ConnectError, ConnectionProvider, PgClient};

const LIST_OP: &str = "listing employees";
const ADD_OP: &str = "adding employee";

/// Insert failure detail.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{0}")]
    Insert(#[source] sqlx::Error),

    #[error("insert returned no row")]
    NoRowReturned,
}

/// Failure of a store operation. Display names the operation and
/// embeds the root cause; the variant distinguishes input rejection
/// from database failures.
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Caller input violated a precondition; no statement was sent
    #[error("error adding employee: {0}")]
    Validation(#[from] ValidationError),

    /// No usable connection could be established
    #[error("error {op}: {source}")]
    Connection {
        op: &'static str,
        #[source]
        source: ConnectError,
    },

    /// The list query was sent but could not be completed
    #[error("error listing employees: {0}")]
    Query(#[source] sqlx::Error),

    /// The insert was sent but failed or returned no row
    #[error("error adding employee: {0}")]
    Persistence(#[source] PersistenceError),
}

/// Raw row shape for the fixed employee column set, addressed by
/// column name.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i32,
    name: String,
    position: String,
    department: String,
    salary: Decimal,
    hire_date: Option<NaiveDate>,
}

impl From<EmployeeRow> for EmployeeRecord {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            position: row.position,
            department: row.department,
            // NUMERIC(12,2) salaries are well inside f64 range
            salary: row.salary.to_f64().unwrap_or_default(),
            hire_date: row.hire_date,
        }
    }
}

/// The two employee operations, constructed once at startup with an
/// injected connection policy and shared across calls. Concurrent
/// calls never share a connection; isolation is the database's job.
#[derive(Clone)]
pub struct EmployeeStore {
    provider: Arc<dyn ConnectionProvider>,
}

impl EmployeeStore {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// List employees ordered by ascending id, paginated in SQL.
    pub async fn list(&self, page: Page) -> Result<Vec<EmployeeRecord>, EmployeeError> {
        let mut client = self.acquire(LIST_OP).await?;
        let result = list_page(&mut client, page).await;
        client.release().await;
        result
    }

    /// Validate and insert one employee, returning the persisted
    /// record including the store-assigned id.
    pub async fn add(&self, input: &NewEmployee) -> Result<EmployeeRecord, EmployeeError> {
        let employee = input.validate()?;
        let mut client = self.acquire(ADD_OP).await?;
        let result = insert_returning(&mut client, &employee).await;
        client.release().await;
        result
    }

    async fn acquire(&self, op: &'static str) -> Result<PgClient, EmployeeError> {
        self.provider
            .acquire()
            .await
            .map_err(|source| EmployeeError::Connection { op, source })
    }
}

async fn list_page(client: &mut PgClient, page: Page) -> Result<Vec<EmployeeRecord>, EmployeeError> {
    let rows: Vec<EmployeeRow> = sqlx::query_as(
        r#"
        SELECT id, name, position, department, salary, hire_date
        FROM employees
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut **client)
    .await
    .map_err(EmployeeError::Query)?;

    Ok(rows.into_iter().map(EmployeeRecord::from).collect())
}

async fn insert_returning(
    client: &mut PgClient,
    employee: &ValidatedEmployee,
) -> Result<EmployeeRecord, EmployeeError> {
    let row: Option<EmployeeRow> = sqlx::query_as(
        r#"
        INSERT INTO employees (name, position, department, salary, hire_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, position, department, salary, hire_date
        "#,
    )
    .bind(&employee.name)
    .bind(&employee.position)
    .bind(&employee.department)
    .bind(employee.salary)
    .bind(employee.hire_date)
    .fetch_optional(&mut **client)
    .await
    .map_err(|source| EmployeeError::Persistence(PersistenceError::Insert(source)))?;

    let row = row.ok_or(EmployeeError::Persistence(PersistenceError::NoRowReturned))?;
    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roster_core::ConfigError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that always fails, counting how often it was asked.
    struct FailingProvider {
        acquires: AtomicUsize,
    }

    impl FailingProvider {
        fn new() -> Self {
            Self {
                acquires: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ConnectionProvider for FailingProvider {
        async fn acquire(&self) -> Result<PgClient, ConnectError> {
            self.acquires.fetch_add(1, Ordering::SeqCst);
            Err(ConnectError::Config(ConfigError::MissingVar {
                name: "DB_HOST",
            }))
        }
    }

    fn valid_input() -> NewEmployee {
        NewEmployee {
            name: "Ana Ruiz".into(),
            position: "Engineer".into(),
            department: "R&D".into(),
            salary: 55000.0,
            hire_date: None,
        }
    }

    #[tokio::test]
    async fn validation_runs_before_any_connection() {
        let provider = Arc::new(FailingProvider::new());
        let store = EmployeeStore::new(provider.clone());

        let mut input = valid_input();
        input.name = "   ".into();
        let err = store.add(&input).await.unwrap_err();

        assert!(matches!(err, EmployeeError::Validation(_)));
        assert_eq!(provider.acquires.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn connection_failure_names_the_operation() {
        let provider = Arc::new(FailingProvider::new());
        let store = EmployeeStore::new(provider.clone());

        let err = store.list(Page::default()).await.unwrap_err();
        assert!(matches!(err, EmployeeError::Connection { .. }));
        assert!(err.to_string().starts_with("error listing employees:"));
        assert!(err.to_string().contains("DB_HOST"));

        let err = store.add(&valid_input()).await.unwrap_err();
        assert!(err.to_string().starts_with("error adding employee:"));
        assert_eq!(provider.acquires.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn row_maps_to_record() {
        let row = EmployeeRow {
            id: 7,
            name: "Ana Ruiz".into(),
            position: "Engineer".into(),
            department: "R&D".into(),
            salary: Decimal::new(5500001, 2),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        };
        let record = EmployeeRecord::from(row);
        assert_eq!(record.id, 7);
        assert_eq!(record.salary, 55000.01);
        assert_eq!(record.hire_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn null_hire_date_maps_to_none() {
        let row = EmployeeRow {
            id: 1,
            name: "Ana Ruiz".into(),
            position: "Engineer".into(),
            department: "R&D".into(),
            salary: Decimal::new(100, 0),
            hire_date: None,
        };
        assert_eq!(EmployeeRecord::from(row).hire_date, None);
    }

    #[test]
    fn validation_error_message_names_the_operation() {
        let err = EmployeeError::Validation(ValidationError::NonPositiveSalary);
        assert_eq!(
            err.to_string(),
            "error adding employee: salary must be a positive number"
        );
    }

    #[test]
    fn no_row_returned_message() {
        let err = EmployeeError::Persistence(PersistenceError::NoRowReturned);
        assert_eq!(err.to_string(), "error adding employee: insert returned no row");
    }
}
