//! Domain entities for employee records
//!
//! An [`Employee`] is the full stored record, including the storage key.
//! An [`EmployeeView`] is what leaves the domain layer: the same record
//! without the key.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::employee::ids::{EmployeeId, InternalKey};

/// An employee record as held by the record store
///
/// - `public_id` is assigned once, at creation, and never changes
/// - `created_at` is set once, at creation, and never changes
/// - `key` is `None` until the record store has persisted the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    key: Option<InternalKey>,
    public_id: EmployeeId,
    first_name: String,
    last_name: String,
    job_role: String,
    created_at: NaiveDateTime,
}

impl Employee {
    /// Create a brand-new, not yet persisted employee
    ///
    /// A fresh public identifier is generated and the creation timestamp is
    /// taken from the local clock. This is a pure constructor, no I/O.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        job_role: impl Into<String>,
    ) -> Self {
        Self {
            key: None,
            public_id: EmployeeId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            job_role: job_role.into(),
            created_at: Local::now().naive_local(),
        }
    }

    /// Create an Employee with explicit values (used for reconstruction)
    pub fn from_parts(
        key: Option<InternalKey>,
        public_id: EmployeeId,
        first_name: String,
        last_name: String,
        job_role: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            key,
            public_id,
            first_name,
            last_name,
            job_role,
            created_at,
        }
    }

    pub fn key(&self) -> Option<InternalKey> {
        self.key
    }

    pub fn public_id(&self) -> &EmployeeId {
        &self.public_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    pub fn created_at(&self) -> &NaiveDateTime {
        &self.created_at
    }

    /// Record the storage key after the record has been persisted
    ///
    /// Called by record store adapters on first save.
    pub fn assign_key(&mut self, key: InternalKey) {
        self.key = Some(key);
    }

    pub fn is_persisted(&self) -> bool {
        self.key.is_some()
    }

    /// Build the replacement record for an update
    ///
    /// Key, public id and creation time are carried over from `self`; only
    /// the names and role come from the update.
    pub fn with_changes(&self, changes: &UpdateEmployee) -> Self {
        Self {
            key: self.key,
            public_id: self.public_id.clone(),
            first_name: changes.first_name.clone(),
            last_name: changes.last_name.clone(),
            job_role: changes.job_role.clone(),
            created_at: self.created_at,
        }
    }

    /// Project the record to its public view
    pub fn view(&self) -> EmployeeView {
        EmployeeView {
            public_id: self.public_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            job_role: self.job_role.clone(),
            created_at: self.created_at,
        }
    }
}

/// Externally visible projection of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub public_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
    pub created_at: NaiveDateTime,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            public_id: employee.public_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            job_role: employee.job_role,
            created_at: employee.created_at,
        }
    }
}

/// Command to create an employee
///
/// `id_hint` is only used for the "already exists" check; the created
/// record always gets a freshly generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub id_hint: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
}

impl CreateEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        job_role: impl Into<String>,
    ) -> Self {
        Self {
            id_hint: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            job_role: job_role.into(),
        }
    }

    pub fn with_id_hint(mut self, hint: impl Into<String>) -> Self {
        self.id_hint = Some(hint.into());
        self
    }
}

/// Command to replace the names and role of an existing employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub public_id: String,
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
}

impl UpdateEmployee {
    pub fn new(
        public_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        job_role: impl Into<String>,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            job_role: job_role.into(),
        }
    }
}
