//! # Rollcall Domain Layer
//!
//! This crate contains the pure business logic and domain models for Rollcall
//! employee records. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Employee, EmployeeView)
//! - **Ports**: Trait definitions for external dependencies (EmployeeRepository)
//! - **Services**: Lifecycle rules for creating, reading, updating and deleting employees
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, CSV, databases).
//! The record store is expressed as a trait (port) implemented by adapter crates,
//! and handed to the service at construction time.
//!
//! ## Example
//!
//! ```rust
//! use rollcall_domain::employee::{CreateEmployee, EmployeeService};
//! use rollcall_domain::ports::EmployeeRepository;
//!
//! async fn example<R: EmployeeRepository>(service: EmployeeService<R>) {
//!     let request = CreateEmployee::new("John", "Doe", "Java Developer");
//!     let view = service.create(request).await.unwrap();
//!     println!("Created employee: {}", view.public_id);
//! }
//! ```

pub mod employee;
pub mod ports;

// Re-export commonly used types
pub use employee::{
    CreateEmployee, Employee, EmployeeConfig, EmployeeError, EmployeeId, EmployeeService,
    EmployeeServicePort, EmployeeView, InternalKey, UpdateEmployee,
};
pub use ports::EmployeeRepository;
