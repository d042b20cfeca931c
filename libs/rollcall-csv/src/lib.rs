//! # Rollcall CSV Projection
//!
//! Renders the full employee collection as a CSV document: one header row,
//! then one row per employee in the order the service lists them.
//!
//! ```text
//! uuid,firstName,lastName,jobRole,created
//! 7fe7acdb-0bf4-428a-81ec-689fd2942084,John,Doe,Java Developer,2023-02-14T18:48:27.314759
//! ```

pub mod error;
pub mod export;

pub use error::CsvExportError;
pub use export::{CsvExportService, ALL_EMPLOYEES_TARGET, CSV_HEADER};
