//! Translation of domain and export failures into HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rollcall_csv::CsvExportError;
use rollcall_domain::EmployeeError;
use tracing::{error, warn};

use crate::dto::employee::{ErrorResponse, FieldErrors, ValidationErrorResponse};

/// Every way an employee endpoint can fail
#[derive(Debug)]
pub enum ApiError {
    Employee(EmployeeError),
    Export(CsvExportError),
    Validation(FieldErrors),
    MalformedBody(String),
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        Self::Employee(err)
    }
}

impl From<CsvExportError> for ApiError {
    fn from(err: CsvExportError) -> Self {
        match err {
            CsvExportError::Employees(inner) => Self::Employee(inner),
            other => Self::Export(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

/// Status for each domain error kind
///
/// `NotFound` and `NoneFound` share 404; clients tell them apart by `message`.
pub fn employee_status(err: &EmployeeError) -> StatusCode {
    match err {
        EmployeeError::AlreadyExists(_) => StatusCode::SEE_OTHER,
        EmployeeError::NotFound(_) | EmployeeError::NoneFound => StatusCode::NOT_FOUND,
        EmployeeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Employee(err) => {
                let status = employee_status(&err);
                if status.is_server_error() {
                    error!(error = %err, "Employee operation failed");
                } else {
                    warn!(error = %err, "Employee operation rejected");
                }
                (status, Json(ErrorResponse::now(err.to_string()))).into_response()
            }
            ApiError::Export(err) => {
                error!(error = ?err, "CSV export failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::now(err.to_string())),
                )
                    .into_response()
            }
            ApiError::Validation(fields) => {
                warn!(fields = ?fields, "Request failed validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse::now(fields)),
                )
                    .into_response()
            }
            ApiError::MalformedBody(message) => {
                warn!(message = %message, "Malformed request body");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::now(message))).into_response()
            }
        }
    }
}
