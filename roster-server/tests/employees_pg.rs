//! Integration tests against a live PostgreSQL
//!
//! Run with:
//!   DATABASE_URL=postgres://... cargo test -p roster-server -- --ignored --test-threads=1
//!
//! The fixture creates and truncates the `employees` table; tests share
//! it, so run single-threaded.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use sqlx::PgPool;

use roster_core::{NewEmployee, Page};
use roster_server::db::{EmployeeError, EmployeeStore, PoolProvider};

async fn test_store() -> (PgPool, EmployeeStore) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPool::connect(&url).await.expect("connect failed");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            department TEXT NOT NULL,
            salary NUMERIC(12,2) NOT NULL,
            hire_date DATE
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("create table failed");

    sqlx::query("TRUNCATE employees RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate failed");

    let store = EmployeeStore::new(Arc::new(PoolProvider::new(pool.clone())));
    (pool, store)
}

fn employee(name: &str, salary: f64, hire_date: Option<&str>) -> NewEmployee {
    NewEmployee {
        name: name.into(),
        position: "Engineer".into(),
        department: "R&D".into(),
        salary,
        hire_date: hire_date.map(Into::into),
    }
}

async fn row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .expect("count failed")
}

#[tokio::test]
#[ignore = "requires database"]
async fn pagination_windows_are_disjoint_and_contiguous() {
    let (_pool, store) = test_store().await;
    for i in 1..=5 {
        store
            .add(&employee(&format!("Employee {i}"), 1000.0 * i as f64, None))
            .await
            .expect("seed insert failed");
    }

    let first = store.list(Page::new(2, 0)).await.expect("list failed");
    let ids: Vec<_> = first.iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 2]);

    let second = store.list(Page::new(2, 2)).await.expect("list failed");
    let ids: Vec<_> = second.iter().map(|e| e.id).collect();
    assert_eq!(ids, [3, 4]);

    let tail = store.list(Page::new(2, 4)).await.expect("list failed");
    let ids: Vec<_> = tail.iter().map(|e| e.id).collect();
    assert_eq!(ids, [5]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_then_list_round_trips_trimmed_fields() {
    let (_pool, store) = test_store().await;

    let mut input = employee("  Ana Ruiz  ", 55000.0, Some("2024-03-15"));
    input.position = " Engineer ".into();
    let added = store.add(&input).await.expect("add failed");

    assert_eq!(added.name, "Ana Ruiz");
    assert_eq!(added.position, "Engineer");
    assert_eq!(added.salary, 55000.0);
    assert_eq!(added.hire_date, NaiveDate::from_ymd_opt(2024, 3, 15));

    let listed = store.list(Page::new(100, 0)).await.expect("list failed");
    let found = listed
        .iter()
        .find(|e| e.id == added.id)
        .expect("added employee missing from list");
    assert_eq!(found, &added);
}

#[tokio::test]
#[ignore = "requires database"]
async fn omitted_hire_date_defaults_to_today() {
    let (_pool, store) = test_store().await;

    let added = store
        .add(&employee("Ana Ruiz", 55000.0, None))
        .await
        .expect("add failed");
    assert_eq!(added.hire_date, Some(Local::now().date_naive()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn validation_failures_never_create_rows() {
    let (pool, store) = test_store().await;

    for _ in 0..3 {
        let err = store
            .add(&employee("", 1000.0, None))
            .await
            .unwrap_err();
        assert!(matches!(err, EmployeeError::Validation(_)));
    }
    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn salary_boundary_at_zero() {
    let (pool, store) = test_store().await;

    let err = store.add(&employee("Ana Ruiz", 0.0, None)).await.unwrap_err();
    assert!(matches!(err, EmployeeError::Validation(_)));
    assert_eq!(row_count(&pool).await, 0);

    let added = store
        .add(&employee("Ana Ruiz", 0.01, None))
        .await
        .expect("add failed");
    assert_eq!(added.salary, 0.01);
    assert_eq!(row_count(&pool).await, 1);
}
