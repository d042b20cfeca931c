//! CSV employee routes

use axum::{routing::get, Router};

use crate::{handlers::csv_employees::download_employees, AppState};

/// Create CSV employee routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/csv/employees", get(download_employees))
}
