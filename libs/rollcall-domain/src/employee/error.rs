//! Domain errors for employee operations
//!
//! The display text of each variant is stable: the API layer forwards it
//! verbatim as the `message` of an error payload.

use thiserror::Error;

/// Errors that can occur during employee lifecycle operations
///
/// None of these are retried by the service; the first failure is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    /// A record already exists under the identifier supplied on create
    #[error("employee with uuid {0} already exists")]
    AlreadyExists(String),

    /// No record matches the looked-up identifier
    #[error("employee with uuid {} not found", describe_id(.0))]
    NotFound(String),

    /// The store holds no records at all
    #[error("no employees found")]
    NoneFound,

    /// The record store failed to carry out an operation
    #[error("storage operation failed: {0}")]
    Storage(String),
}

impl EmployeeError {
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Keeps the not-found message informative when the id is blank
fn describe_id(id: &str) -> &str {
    if id.is_empty() {
        "of empty string"
    } else {
        id
    }
}

/// Result type alias for employee operations
pub type Result<T> = std::result::Result<T, EmployeeError>;
