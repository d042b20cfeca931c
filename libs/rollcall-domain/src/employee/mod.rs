//! Employee domain module
//!
//! This module contains the entities, identifiers, errors and lifecycle
//! service for employee records.

pub mod entity;
pub mod error;
pub mod ids;
pub mod ports;
pub mod service;

pub use entity::{CreateEmployee, Employee, EmployeeView, UpdateEmployee};
pub use error::{EmployeeError, Result};
pub use ids::{EmployeeId, InternalKey};
pub use ports::EmployeeServicePort;
pub use service::{EmployeeConfig, EmployeeService};
