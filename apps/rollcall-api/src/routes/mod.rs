//! API routes

pub mod csv_employees;
pub mod json_employees;

use axum::Router;
use utoipa::{openapi::server::Server, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::employee::{EmployeeRequest, EmployeeResponse, ErrorResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::json_employees::create_employee,
        handlers::json_employees::get_employee,
        handlers::json_employees::list_employees,
        handlers::json_employees::update_employee,
        handlers::json_employees::delete_employee,
        handlers::csv_employees::download_employees,
        health_handler
    ),
    components(
        schemas(EmployeeRequest, EmployeeResponse, ErrorResponse)
    ),
    tags(
        (name = "json", description = "Employee records as JSON"),
        (name = "csv", description = "Employee records as CSV"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "Employee records over JSON and CSV",
        contact(
            name = "Rollcall Team"
        )
    )
)]
pub struct ApiDoc;

/// Document the employee routes as served under `base_path`
fn api_doc(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !base_path.is_empty() {
        doc.servers = Some(vec![Server::new(base_path)]);
    }
    doc
}

/// Create the main application router
///
/// Employee routes live under `base_path` (empty for the root); health and
/// documentation routes are always at the root.
pub fn create_router(state: AppState, base_path: &str) -> Router {
    let employees = Router::new()
        .merge(json_employees::routes())
        .merge(csv_employees::routes());

    let employees = if base_path.is_empty() {
        employees
    } else {
        Router::new().nest(base_path, employees)
    };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc(base_path)))
        .merge(employees)
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
