use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use chrono::Utc;

use roster_domain::employee::{NewEmployee, UniqueField};
use roster_employees::domain::repository::EmployeeRepository;
use roster_employees::domain::types::Employee;
use roster_employees::error::EmployeesServiceError;
use roster_employees::router::build_router;
use roster_employees::state::AppState;

// ── InMemoryEmployeeRepo ─────────────────────────────────────────────────────

/// Store that enforces the unique keys on insert, like the database indexes.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepo {
    pub rows: Arc<Mutex<Vec<Employee>>>,
    /// When set, `find_conflicts` sees nothing, as if a concurrent writer
    /// inserted between the check and the insert.
    pub hide_conflicts: bool,
}

impl InMemoryEmployeeRepo {
    pub fn racing() -> Self {
        Self {
            hide_conflicts: true,
            ..Self::default()
        }
    }

    /// Returns a shared handle to the stored rows for post-request inspection.
    pub fn rows_handle(&self) -> Arc<Mutex<Vec<Employee>>> {
        Arc::clone(&self.rows)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepo {
    async fn find_conflicts(
        &self,
        employee_id: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        if self.hide_conflicts {
            return Ok(vec![]);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.employee_id == employee_id || e.email == email || e.phone_number == phone_number
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, EmployeesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let taken: Vec<_> = UniqueField::ALL
            .into_iter()
            .filter(|f| rows.iter().any(|e| e.unique_value(*f) == employee.unique_value(*f)))
            .collect();
        if let Some(first) = taken.first() {
            return Err(EmployeesServiceError::duplicate([*first]));
        }
        let id = rows.len() as i64 + 1;
        rows.push(Employee {
            id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            employee_id: employee.employee_id.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            country_code: employee.country_code.clone(),
            department: employee.department,
            date_of_joining: employee.date_of_joining,
            role: employee.role.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn exists(&self, field: UniqueField, value: &str) -> Result<bool, EmployeesServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.unique_value(field) == value))
    }

    async fn ping(&self) -> Result<(), EmployeesServiceError> {
        Ok(())
    }
}

// ── FailingEmployeeRepo ──────────────────────────────────────────────────────

/// Store whose every call fails as if the database were unreachable.
#[derive(Clone, Default)]
pub struct FailingEmployeeRepo;

fn unreachable_db() -> EmployeesServiceError {
    EmployeesServiceError::Storage(anyhow::anyhow!("connection refused"))
}

impl EmployeeRepository for FailingEmployeeRepo {
    async fn find_conflicts(
        &self,
        _employee_id: &str,
        _email: &str,
        _phone_number: &str,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        Err(unreachable_db())
    }

    async fn insert(&self, _employee: &NewEmployee) -> Result<i64, EmployeesServiceError> {
        Err(unreachable_db())
    }

    async fn exists(&self, _field: UniqueField, _value: &str) -> Result<bool, EmployeesServiceError> {
        Err(unreachable_db())
    }

    async fn ping(&self) -> Result<(), EmployeesServiceError> {
        Err(unreachable_db())
    }
}

// ── FailingInsertRepo ────────────────────────────────────────────────────────

/// Store that answers lookups but loses the connection on insert.
#[derive(Clone, Default)]
pub struct FailingInsertRepo;

impl EmployeeRepository for FailingInsertRepo {
    async fn find_conflicts(
        &self,
        _employee_id: &str,
        _email: &str,
        _phone_number: &str,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        Ok(vec![])
    }

    async fn insert(&self, _employee: &NewEmployee) -> Result<i64, EmployeesServiceError> {
        Err(unreachable_db())
    }

    async fn exists(&self, _field: UniqueField, _value: &str) -> Result<bool, EmployeesServiceError> {
        Ok(false)
    }

    async fn ping(&self) -> Result<(), EmployeesServiceError> {
        Ok(())
    }
}

// ── Test server ──────────────────────────────────────────────────────────────

pub fn test_server<R>(repo: R) -> TestServer
where
    R: EmployeeRepository + Clone + 'static,
{
    TestServer::new(build_router(AppState { employees: repo })).unwrap()
}
