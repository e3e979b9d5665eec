use sea_orm::DatabaseConnection;

use crate::infra::db::DbEmployeeRepository;

/// Shared application state passed to every handler via axum `State`.
///
/// Generic over the repository so tests can route requests to an in-memory store.
#[derive(Clone)]
pub struct AppState<R = DbEmployeeRepository> {
    pub employees: R,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: DbEmployeeRepository { db },
        }
    }
}

impl<R: Clone> AppState<R> {
    pub fn employee_repo(&self) -> R {
        self.employees.clone()
    }
}
