//! CSV export service
//!
//! Reads the employee collection through the service port and encodes it
//! with the `csv` writer. Listing failures are returned untouched; anything
//! that goes wrong while encoding or writing becomes `GenerationFailed`.

use std::io::Write;

use bytes::Bytes;
use rollcall_domain::{EmployeeServicePort, EmployeeView};
use tracing::{debug, error, info};

use crate::error::CsvExportError;

/// Name of the document produced by [`CsvExportService::render_all_as_csv`]
pub const ALL_EMPLOYEES_TARGET: &str = "all_employees.csv";

/// Column order of every rendered document
pub const CSV_HEADER: [&str; 5] = ["uuid", "firstName", "lastName", "jobRole", "created"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Service rendering all employees as CSV
pub struct CsvExportService<S> {
    employees: S,
}

impl<S> CsvExportService<S>
where
    S: EmployeeServicePort,
{
    pub fn new(employees: S) -> Self {
        Self { employees }
    }

    /// Render every employee into an in-memory CSV document
    ///
    /// # Errors
    ///
    /// - `CsvExportError::Employees` if listing fails (e.g. `NoneFound`)
    /// - `CsvExportError::GenerationFailed` if encoding fails
    pub async fn render_all_as_csv(&self) -> Result<Bytes, CsvExportError> {
        let buffer = self.render_all_into(Vec::new()).await?;

        info!(
            target_name = ALL_EMPLOYEES_TARGET,
            size = buffer.len(),
            "Rendered employees as CSV"
        );
        Ok(Bytes::from(buffer))
    }

    /// Render every employee into `sink`, handing the sink back once flushed
    pub async fn render_all_into<W: Write>(&self, sink: W) -> Result<W, CsvExportError> {
        let views = self.employees.list_all().await?;
        debug!(rows = views.len(), "Encoding employees");

        write_document(&views, sink).map_err(|err| {
            error!(target_name = ALL_EMPLOYEES_TARGET, error = %err, "CSV generation failed");
            CsvExportError::generation_failed(ALL_EMPLOYEES_TARGET, err)
        })
    }
}

fn write_document<W: Write>(views: &[EmployeeView], sink: W) -> Result<W, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for view in views {
        let created = view.created_at.format(TIMESTAMP_FORMAT).to_string();
        writer.write_record([
            view.public_id.as_str(),
            view.first_name.as_str(),
            view.last_name.as_str(),
            view.job_role.as_str(),
            created.as_str(),
        ])?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
