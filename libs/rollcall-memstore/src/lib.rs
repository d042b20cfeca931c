//! # Rollcall In-Memory Record Store
//!
//! Implements the [`EmployeeRepository`](rollcall_domain::ports::EmployeeRepository)
//! port on top of a process-local map. Records live as long as the process.

pub mod infrastructure;

pub use infrastructure::InMemoryEmployeeRepository;
