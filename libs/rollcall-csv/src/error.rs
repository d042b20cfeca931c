//! Errors raised while producing the CSV document

use rollcall_domain::EmployeeError;
use thiserror::Error;

/// Errors that can occur during CSV export
#[derive(Error, Debug)]
pub enum CsvExportError {
    /// Listing the employees failed; passed through unchanged
    #[error(transparent)]
    Employees(#[from] EmployeeError),

    /// Encoding or writing the document failed
    #[error("CSV generation error for {target}")]
    GenerationFailed {
        target: String,
        #[source]
        source: Option<csv::Error>,
    },
}

impl CsvExportError {
    pub fn generation_failed(target: impl Into<String>, source: csv::Error) -> Self {
        Self::GenerationFailed {
            target: target.into(),
            source: Some(source),
        }
    }
}
