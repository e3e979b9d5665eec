use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use roster_domain::employee::EmployeeDraft;
use roster_domain::validation::local_today;

use crate::domain::repository::EmployeeRepository;
use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::employee::{CheckDuplicateUseCase, SubmitEmployeeInput, SubmitEmployeeUseCase};

// ── POST /api/employees ──────────────────────────────────────────────────────

/// Submitted record. `null` and absent keys both count as missing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    pub department: Option<String>,
    pub date_of_joining: Option<String>,
    pub role: Option<String>,
}

impl From<SubmitEmployeeRequest> for EmployeeDraft {
    fn from(body: SubmitEmployeeRequest) -> Self {
        Self {
            first_name: body.first_name.unwrap_or_default(),
            last_name: body.last_name.unwrap_or_default(),
            employee_id: body.employee_id.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            phone_number: body.phone_number.unwrap_or_default(),
            country_code: body.country_code.unwrap_or_default(),
            department: body.department.unwrap_or_default(),
            date_of_joining: body.date_of_joining.unwrap_or_default(),
            role: body.role.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEmployeeResponse {
    pub message: &'static str,
    /// Generated row id.
    pub employee_id: i64,
}

pub async fn submit_employee<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<SubmitEmployeeRequest>,
) -> Result<(StatusCode, Json<SubmitEmployeeResponse>), EmployeesServiceError>
where
    R: EmployeeRepository + Clone,
{
    let usecase = SubmitEmployeeUseCase {
        repo: state.employee_repo(),
    };
    let id = usecase
        .execute(SubmitEmployeeInput {
            draft: body.into(),
            today: local_today(),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitEmployeeResponse {
            message: "Employee added successfully.",
            employee_id: id,
        }),
    ))
}

// ── POST /api/checkDuplicates ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckDuplicateRequest {
    /// camelCase field name: `employeeId`, `email` or `phoneNumber`.
    pub name: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct CheckDuplicateResponse {
    pub exists: bool,
}

pub async fn check_duplicates<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<CheckDuplicateRequest>,
) -> Result<Json<CheckDuplicateResponse>, EmployeesServiceError>
where
    R: EmployeeRepository + Clone,
{
    let usecase = CheckDuplicateUseCase {
        repo: state.employee_repo(),
    };
    let exists = usecase.execute(&body.name, &body.value).await?;
    Ok(Json(CheckDuplicateResponse { exists }))
}
