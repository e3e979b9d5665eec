use std::future::Future;

use roster_domain::employee::{NewEmployee, UniqueField};

use crate::domain::types::Employee;
use crate::error::EmployeesServiceError;

/// Repository for employee records.
///
/// Futures are `Send` so handlers stay generic over the implementation.
pub trait EmployeeRepository: Send + Sync {
    /// Stored employees matching any of the three unique keys, ordered by id.
    fn find_conflicts(
        &self,
        employee_id: &str,
        email: &str,
        phone_number: &str,
    ) -> impl Future<Output = Result<Vec<Employee>, EmployeesServiceError>> + Send;

    /// Insert and return the generated id. A unique-key collision yields
    /// `DuplicateField`; any other fault yields `Storage`.
    fn insert(
        &self,
        employee: &NewEmployee,
    ) -> impl Future<Output = Result<i64, EmployeesServiceError>> + Send;

    fn exists(
        &self,
        field: UniqueField,
        value: &str,
    ) -> impl Future<Output = Result<bool, EmployeesServiceError>> + Send;

    fn ping(&self) -> impl Future<Output = Result<(), EmployeesServiceError>> + Send;
}
