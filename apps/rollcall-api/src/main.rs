//! Rollcall API - Employee Records Service
//!
//! HTTP service exposing employee records as JSON (full CRUD) and as a CSV
//! download. Records are held by the in-memory record store.

mod config;
mod dto;
mod handlers;
mod logging;
mod routes;

use anyhow::Result;
use rollcall_csv::CsvExportService;
use rollcall_domain::{EmployeeConfig, EmployeeService};
use rollcall_memstore::InMemoryEmployeeRepository;
use std::sync::Arc;
use tracing::info;

use crate::config::ApiConfig;

/// Employee service as wired in this binary
pub type Employees = EmployeeService<InMemoryEmployeeRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<Employees>,
    pub csv_export_service: Arc<CsvExportService<Arc<Employees>>>,
}

impl AppState {
    /// Build the state around one employee service, shared with the CSV export
    pub fn new(service: Employees) -> Self {
        let employee_service = Arc::new(service);
        let csv_export_service = Arc::new(CsvExportService::new(employee_service.clone()));
        Self {
            employee_service,
            csv_export_service,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    // Initialize tracing
    logging::init(config.log_format);

    info!("Starting Rollcall API service");

    let repository = InMemoryEmployeeRepository::new();

    let service = EmployeeService::new(
        repository,
        EmployeeConfig {
            empty_listing_is_error: config.empty_list_is_error,
        },
    );

    let state = AppState::new(service);

    // Build HTTP router
    let app = routes::create_router(state, &config.base_path);

    let addr = config.bind_addr();
    info!(addr = %addr, base_path = %config.base_path, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Rollcall API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
