use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use roster_domain::employee::{EmployeeField, FieldErrors, UniqueField};

/// Employees service error variants.
#[derive(Debug, thiserror::Error)]
pub enum EmployeesServiceError {
    /// Required fields absent from the submission.
    #[error("All fields are required.")]
    MissingField(Vec<EmployeeField>),
    /// Fields present but rejected by the validation rules.
    #[error("invalid fields")]
    InvalidField(FieldErrors),
    /// Uniqueness violation, one message per conflicting field.
    #[error("duplicate fields")]
    DuplicateField(FieldErrors),
    #[error("Unknown field.")]
    UnknownField,
    #[error("Database query error.")]
    Storage(#[from] anyhow::Error),
}

impl EmployeesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::DuplicateField(_) => "DUPLICATE_FIELD",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::Storage(_) => "STORAGE",
        }
    }

    /// A `DuplicateField` naming each of `fields`.
    pub fn duplicate(fields: impl IntoIterator<Item = UniqueField>) -> Self {
        Self::DuplicateField(
            fields
                .into_iter()
                .map(|f| (f.field(), f.duplicate_message().to_owned()))
                .collect(),
        )
    }
}

impl IntoResponse for EmployeesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_)
            | Self::InvalidField(_)
            | Self::DuplicateField(_)
            | Self::UnknownField => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Storage(ref e) = self {
            tracing::error!(error = ?e, kind = self.kind(), "storage error");
        }
        let body = match &self {
            Self::InvalidField(errors) | Self::DuplicateField(errors) => serde_json::json!(errors),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
