//! API error mapping for the tool surface
//!
//! Failures travel on the call's own failure signal: a non-2xx status
//! plus `{ error, message }`. A failed operation is never dressed up
//! as an error-shaped success payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::EmployeeError;

/// Wire error for a failed tool call.
#[derive(Debug)]
pub struct ApiError(pub EmployeeError);

impl ApiError {
    /// Stable error kind for callers and tests to assert on.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            EmployeeError::Validation(_) => "validation_error",
            EmployeeError::Connection { .. } => "connection_error",
            EmployeeError::Query(_) => "query_error",
            EmployeeError::Persistence(_) => "persistence_error",
        }
    }

    fn status(&self) -> StatusCode {
        match &self.0 {
            EmployeeError::Validation(_) => StatusCode::BAD_REQUEST,
            EmployeeError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
            EmployeeError::Query(_) | EmployeeError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self.0);
        }
        let body = Json(json!({
            "error": self.kind(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        Self(err)
    }
}
