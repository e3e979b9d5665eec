use axum::{extract::State, http::StatusCode};

use crate::domain::repository::EmployeeRepository;
use crate::state::AppState;

/// Handler for `GET /readyz` — ready once the database answers.
pub async fn readyz<R: EmployeeRepository>(State(state): State<AppState<R>>) -> StatusCode {
    match state.employees.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = ?e, "database not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
