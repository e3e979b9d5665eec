use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use roster_core::health::healthz;
use roster_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::repository::EmployeeRepository;
use crate::handlers::{
    employee::{check_duplicates, submit_employee},
    health::readyz,
};
use crate::state::AppState;

pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: EmployeeRepository + Clone + 'static,
{
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<R>))
        // Employees
        .route("/api/employees", post(submit_employee::<R>))
        .route("/api/checkDuplicates", post(check_duplicates::<R>))
        // The form is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
