//! JSON employee routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::json_employees::{
        create_employee, delete_employee, get_employee, list_employees, update_employee,
    },
    AppState,
};

/// Create JSON employee routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/json/employees",
            post(create_employee)
                .get(list_employees)
                .put(update_employee),
        )
        .route(
            "/json/employees/:uuid",
            get(get_employee).delete(delete_employee),
        )
}
