//! Port trait for the Employee Service
//!
//! Consumers such as the CSV projection depend on this trait rather than on
//! the concrete `EmployeeService`, so they can be exercised against a fake.

use std::future::Future;
use std::sync::Arc;

use crate::employee::{
    entity::{CreateEmployee, EmployeeView, UpdateEmployee},
    error::EmployeeError,
};

/// Port trait for employee lifecycle operations
pub trait EmployeeServicePort: Send + Sync {
    /// Create an employee
    ///
    /// # Errors
    ///
    /// - `EmployeeError::AlreadyExists` if a record is held under the request's id hint
    fn create(
        &self,
        request: CreateEmployee,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send;

    /// Fetch one employee by public identifier
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches
    fn get(
        &self,
        public_id: &str,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send;

    /// Fetch every employee in the store's natural order
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NoneFound` if the store is empty (unless configured otherwise)
    fn list_all(&self) -> impl Future<Output = Result<Vec<EmployeeView>, EmployeeError>> + Send;

    /// Replace the names and role of an existing employee
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches the request's id
    fn update(
        &self,
        request: UpdateEmployee,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send;

    /// Delete an employee
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches
    fn delete(&self, public_id: &str) -> impl Future<Output = Result<(), EmployeeError>> + Send;
}

impl<T> EmployeeServicePort for Arc<T>
where
    T: EmployeeServicePort,
{
    fn create(
        &self,
        request: CreateEmployee,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send {
        (**self).create(request)
    }

    fn get(
        &self,
        public_id: &str,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send {
        (**self).get(public_id)
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<EmployeeView>, EmployeeError>> + Send {
        (**self).list_all()
    }

    fn update(
        &self,
        request: UpdateEmployee,
    ) -> impl Future<Output = Result<EmployeeView, EmployeeError>> + Send {
        (**self).update(request)
    }

    fn delete(&self, public_id: &str) -> impl Future<Output = Result<(), EmployeeError>> + Send {
        (**self).delete(public_id)
    }
}
