//! Tool endpoints: `list_employees` and `add_employee`
//!
//! Handlers stay thin: decode the call, run the store operation,
//! encode the result. Validation, mapping, and error semantics all
//! live in the store.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use roster_core::{EmployeeRecord, NewEmployee, Page};

use crate::error::ApiError;
use crate::state::AppState;

/// Body for `list_employees`; both fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Success envelope for `add_employee`.
#[derive(Debug, Serialize)]
pub struct AddEmployeeResponse {
    pub success: bool,
    pub employee: EmployeeRecord,
}

/// Tool routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/list_employees", post(list_employees))
        .route("/tools/add_employee", post(add_employee))
}

/// GET /tools: advertise the callable tools.
async fn list_tools() -> Json<Value> {
    Json(json!({
        "tools": [
            {
                "name": "list_employees",
                "description": "List employees with pagination",
                "parameters": {
                    "limit": "integer, default 10",
                    "offset": "integer, default 0"
                }
            },
            {
                "name": "add_employee",
                "description": "Add a new employee",
                "parameters": {
                    "name": "string, required",
                    "position": "string, required",
                    "department": "string, required",
                    "salary": "number, required",
                    "hire_date": "YYYY-MM-DD, defaults to today"
                }
            }
        ]
    }))
}

/// POST /tools/list_employees
async fn list_employees(
    State(state): State<AppState>,
    Json(req): Json<ListEmployeesRequest>,
) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let page = Page::from_options(req.limit, req.offset);
    let employees = state.store().list(page).await?;
    Ok(Json(employees))
}

/// POST /tools/add_employee
async fn add_employee(
    State(state): State<AppState>,
    Json(input): Json<NewEmployee>,
) -> Result<Json<AddEmployeeResponse>, ApiError> {
    let employee = state.store().add(&input).await?;
    Ok(Json(AddEmployeeResponse {
        success: true,
        employee,
    }))
}
