use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::error;

use crate::core::app::AppState;

pub const HEALTHY: &str = "system ok";
pub const UNHEALTHY: &str = "An error occurred. Check server logs.";

/// GET /health-check
///
/// Succeeds only if a statement can round-trip through the database.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.db.ping(&state.query_log).await {
        Ok(()) => (StatusCode::OK, HEALTHY),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, UNHEALTHY)
        }
    }
}
