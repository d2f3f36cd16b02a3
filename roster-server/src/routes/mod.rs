//! HTTP routes for the tool-invocation surface

pub mod health;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// All routes, still waiting for state.
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).merge(tools::router())
}
