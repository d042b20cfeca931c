//! In-memory Record Store Implementation
//!
//! This module implements the `EmployeeRepository` trait on a shared map
//! guarded by an async `RwLock`. Records are keyed by their storage key, and
//! keys are handed out in increasing order, so iteration follows creation order.

use std::collections::BTreeMap;
use std::sync::Arc;

use rollcall_domain::{
    employee::{Employee, EmployeeError, InternalKey},
    ports::EmployeeRepository,
};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Default)]
struct StoreState {
    records: BTreeMap<InternalKey, Employee>,
    last_key: u64,
}

impl StoreState {
    fn key_of(&self, public_id: &str) -> Option<InternalKey> {
        self.records
            .iter()
            .find(|(_, employee)| employee.public_id().as_str() == public_id)
            .map(|(key, _)| *key)
    }

    fn next_key(&mut self) -> InternalKey {
        self.last_key += 1;
        InternalKey::new(self.last_key)
    }
}

/// In-memory implementation of the EmployeeRepository port
///
/// Cloning the repository yields another handle onto the same records, so a
/// single store can be shared between the service and tests.
///
/// ## Constraints
///
/// - A public id may be held by one live record only; a second insert with
///   the same id fails with `EmployeeError::Storage`
/// - Saving a keyed record the store does not know fails with `EmployeeError::Storage`
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        info!("Initializing InMemoryEmployeeRepository");
        Self::default()
    }

    /// Number of live records
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    #[instrument(skip(self))]
    fn find_by_public_id(
        &self,
        public_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Employee>, EmployeeError>> + Send {
        let state = self.state.clone();
        let public_id = public_id.to_owned();

        async move {
            let state = state.read().await;
            let found = state
                .key_of(&public_id)
                .and_then(|key| state.records.get(&key))
                .cloned();

            debug!(public_id = %public_id, found = found.is_some(), "Looked up employee");
            Ok(found)
        }
    }

    #[instrument(skip(self))]
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, EmployeeError>> + Send {
        let state = self.state.clone();

        async move {
            let all: Vec<Employee> = state.read().await.records.values().cloned().collect();

            debug!(count = all.len(), "Listed employees");
            Ok(all)
        }
    }

    #[instrument(skip(self, employee), fields(public_id = %employee.public_id()))]
    fn save(
        &self,
        employee: Employee,
    ) -> impl std::future::Future<Output = Result<Employee, EmployeeError>> + Send {
        let state = self.state.clone();

        async move {
            let mut state = state.write().await;
            let mut employee = employee;

            match employee.key() {
                Some(key) => {
                    if !state.records.contains_key(&key) {
                        warn!(key = %key, "Refusing to save record with unknown key");
                        return Err(EmployeeError::storage(format!(
                            "no record with key {}",
                            key
                        )));
                    }
                    if let Some(holder) = state.key_of(employee.public_id().as_str()) {
                        if holder != key {
                            warn!(key = %key, "Refusing to save record, public id taken");
                            return Err(EmployeeError::storage(format!(
                                "public id {} is held by another record",
                                employee.public_id()
                            )));
                        }
                    }
                    state.records.insert(key, employee.clone());
                    debug!(key = %key, "Replaced employee record");
                }
                None => {
                    if state.key_of(employee.public_id().as_str()).is_some() {
                        warn!("Refusing to insert record, public id taken");
                        return Err(EmployeeError::storage(format!(
                            "public id {} is held by another record",
                            employee.public_id()
                        )));
                    }
                    let key = state.next_key();
                    employee.assign_key(key);
                    state.records.insert(key, employee.clone());
                    debug!(key = %key, "Inserted employee record");
                }
            }

            Ok(employee)
        }
    }

    #[instrument(skip(self))]
    fn delete_by_public_id(
        &self,
        public_id: &str,
    ) -> impl std::future::Future<Output = Result<(), EmployeeError>> + Send {
        let state = self.state.clone();
        let public_id = public_id.to_owned();

        async move {
            let mut state = state.write().await;
            match state.key_of(&public_id) {
                Some(key) => {
                    state.records.remove(&key);
                    debug!(public_id = %public_id, key = %key, "Removed employee record");
                }
                None => debug!(public_id = %public_id, "Nothing to remove"),
            }
            Ok(())
        }
    }
}
