use chrono::NaiveDate;

use roster_domain::employee::{EmployeeDraft, UniqueField};
use roster_domain::validation;

use crate::domain::repository::EmployeeRepository;
use crate::domain::types::conflicting_fields;
use crate::error::EmployeesServiceError;

// ── SubmitEmployee ───────────────────────────────────────────────────────────

pub struct SubmitEmployeeInput {
    pub draft: EmployeeDraft,
    /// Date used for the future-joining-date rule.
    pub today: NaiveDate,
}

pub struct SubmitEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> SubmitEmployeeUseCase<R> {
    /// Validate, check uniqueness, then insert. Returns the generated id.
    pub async fn execute(&self, input: SubmitEmployeeInput) -> Result<i64, EmployeesServiceError> {
        let missing = validation::missing_fields(&input.draft);
        if !missing.is_empty() {
            return Err(EmployeesServiceError::MissingField(missing));
        }
        let employee = validation::parse(&input.draft, input.today)
            .map_err(EmployeesServiceError::InvalidField)?;

        let existing = self
            .repo
            .find_conflicts(
                &employee.employee_id,
                &employee.email,
                &employee.phone_number,
            )
            .await?;
        let conflicts = conflicting_fields(&existing, &employee);
        if !conflicts.is_empty() {
            return Err(EmployeesServiceError::duplicate(conflicts));
        }

        let id = self.repo.insert(&employee).await?;
        tracing::info!(id, employee_id = %employee.employee_id, "employee created");
        Ok(id)
    }
}

// ── CheckDuplicate ───────────────────────────────────────────────────────────

pub struct CheckDuplicateUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> CheckDuplicateUseCase<R> {
    /// Whether `value` is already stored under the unique field named `name`.
    pub async fn execute(&self, name: &str, value: &str) -> Result<bool, EmployeesServiceError> {
        let field = UniqueField::from_camel_case(name).ok_or(EmployeesServiceError::UnknownField)?;
        if value.is_empty() {
            return Ok(false);
        }
        self.repo.exists(field, value).await
    }
}
