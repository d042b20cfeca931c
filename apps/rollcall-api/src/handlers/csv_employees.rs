//! CSV employee handler

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use rollcall_csv::ALL_EMPLOYEES_TARGET;
use tracing::info;

use crate::{dto::employee::ErrorResponse, handlers::error::ApiError, AppState};

/// Download every employee as a CSV document
#[utoipa::path(
    get,
    path = "/csv/employees",
    responses(
        (status = 200, description = "CSV document of all employees", body = String, content_type = "text/csv"),
        (status = 404, description = "No employees found", body = ErrorResponse),
        (status = 500, description = "CSV generation failed", body = ErrorResponse)
    ),
    tag = "csv"
)]
pub async fn download_employees(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.csv_export_service.render_all_as_csv().await?;
    info!(size = document.len(), "Serving employees CSV");

    let disposition = format!("attachment; filename={}", ALL_EMPLOYEES_TARGET);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}
