//! HTTP handlers

pub mod csv_employees;
pub mod error;
pub mod json_employees;
