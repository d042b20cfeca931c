//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::employee::{entity::Employee, error::EmployeeError};

/// Port for the employee record store
///
/// This trait abstracts away the storage backend. Implementations must:
/// - Keep `public_id` unique across live records
/// - Assign an [`InternalKey`](crate::employee::InternalKey) on first save
/// - Return records from `find_all` in the store's natural order
/// - Convert backend failures to `EmployeeError::Storage`
///
/// No operation here spans more than one call; the service's read-then-write
/// sequences are not atomic.
pub trait EmployeeRepository: Send + Sync {
    /// Look a record up by its public identifier
    ///
    /// Any string is a valid query; an unmatched one yields `Ok(None)`.
    fn find_by_public_id(
        &self,
        public_id: &str,
    ) -> impl Future<Output = Result<Option<Employee>, EmployeeError>> + Send;

    /// Retrieve every live record in natural order
    fn find_all(&self) -> impl Future<Output = Result<Vec<Employee>, EmployeeError>> + Send;

    /// Persist a record
    ///
    /// A record without a key is inserted and receives one; a keyed record
    /// replaces the stored record with that key.
    ///
    /// # Returns
    ///
    /// The record as persisted, key included
    fn save(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, EmployeeError>> + Send;

    /// Remove the record holding this public identifier
    fn delete_by_public_id(
        &self,
        public_id: &str,
    ) -> impl Future<Output = Result<(), EmployeeError>> + Send;
}
