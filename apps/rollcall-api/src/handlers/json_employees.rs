//! JSON employee handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    dto::employee::{EmployeeRequest, EmployeeResponse, ErrorResponse, ValidatedFields},
    handlers::error::ApiError,
    AppState,
};

fn validated_body(
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(EmployeeRequest, ValidatedFields), ApiError> {
    let Json(request) = payload?;
    let fields = request.validate().map_err(ApiError::Validation)?;
    Ok((request, fields))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/json/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 303, description = "An employee already holds the supplied uuid", body = ErrorResponse),
        (status = 400, description = "Malformed body or invalid fields")
    ),
    tag = "json"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let (request, fields) = validated_body(payload)?;
    info!(id_hint = ?request.uuid, "Received create employee request");

    let view = state
        .employee_service
        .create(request.into_create(fields))
        .await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// Fetch one employee
#[utoipa::path(
    get,
    path = "/json/employees/{uuid}",
    params(("uuid" = String, Path, description = "Public identifier of the employee")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "No employee with this uuid", body = ErrorResponse)
    ),
    tag = "json"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let view = state.employee_service.get(&uuid).await?;
    Ok(Json(view.into()))
}

/// List every employee
#[utoipa::path(
    get,
    path = "/json/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse]),
        (status = 404, description = "No employees found", body = ErrorResponse)
    ),
    tag = "json"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let views = state.employee_service.list_all().await?;
    Ok(Json(views.into_iter().map(EmployeeResponse::from).collect()))
}

/// Replace the names and role of an employee
#[utoipa::path(
    put,
    path = "/json/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Malformed body or invalid fields"),
        (status = 404, description = "No employee with this uuid", body = ErrorResponse)
    ),
    tag = "json"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let (request, fields) = validated_body(payload)?;
    info!(uuid = ?request.uuid, "Received update employee request");

    let view = state
        .employee_service
        .update(request.into_update(fields))
        .await?;

    Ok(Json(view.into()))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/json/employees/{uuid}",
    params(("uuid" = String, Path, description = "Public identifier of the employee")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "No employee with this uuid", body = ErrorResponse)
    ),
    tag = "json"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.employee_service.delete(&uuid).await?;
    Ok(StatusCode::OK)
}
