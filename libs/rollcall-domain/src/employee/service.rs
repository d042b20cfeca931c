//! Employee service - Business logic orchestration
//!
//! This module contains the lifecycle rules for employee records.
//! The service coordinates between the domain entities and the record store port.

use tracing::{debug, info, warn};

use super::{
    CreateEmployee, Employee, EmployeeError, EmployeeServicePort, EmployeeView, UpdateEmployee,
};
use crate::ports::EmployeeRepository;

/// Configuration for the employee service
#[derive(Debug, Clone)]
pub struct EmployeeConfig {
    /// Whether listing an empty store fails with `NoneFound` (default: true)
    ///
    /// When disabled, `list_all` returns an empty list instead.
    pub empty_listing_is_error: bool,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        Self {
            empty_listing_is_error: true,
        }
    }
}

/// Service enforcing the employee lifecycle
///
/// Each record moves `nonexistent -> existing` on create, stays `existing`
/// across updates and returns to `nonexistent` on delete. The service:
/// - Rejects a create whose id hint is already taken
/// - Always assigns a freshly generated public id on create
/// - Preserves public id, storage key and creation time across updates
/// - Surfaces missing records as `NotFound`
///
/// The service holds no state of its own; everything lives in the record
/// store passed in at construction.
pub struct EmployeeService<R> {
    repository: R,
    config: EmployeeConfig,
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    /// Create a new EmployeeService with the given repository and configuration
    pub fn new(repository: R, config: EmployeeConfig) -> Self {
        Self { repository, config }
    }

    /// Create a new EmployeeService with default configuration
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, EmployeeConfig::default())
    }

    /// Create an employee
    ///
    /// The id hint is checked against the store, but the new record never
    /// takes it: a fresh identifier is generated regardless.
    ///
    /// # Errors
    ///
    /// - `EmployeeError::AlreadyExists` if a record is held under the id hint
    /// - `EmployeeError::Storage` if the store fails
    pub async fn create(&self, request: CreateEmployee) -> Result<EmployeeView, EmployeeError> {
        if let Some(hint) = request.id_hint.as_deref() {
            if self.repository.find_by_public_id(hint).await?.is_some() {
                warn!(id_hint = %hint, "Rejecting create, employee already exists");
                return Err(EmployeeError::already_exists(hint));
            }
        }

        let employee = Employee::new(request.first_name, request.last_name, request.job_role);
        let saved = self.repository.save(employee).await?;

        info!(public_id = %saved.public_id(), "Created employee");
        Ok(saved.view())
    }

    /// Fetch one employee by public identifier
    ///
    /// The identifier is not validated; empty or malformed text simply
    /// fails to match.
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches
    pub async fn get(&self, public_id: &str) -> Result<EmployeeView, EmployeeError> {
        self.find_existing(public_id).await.map(|employee| employee.view())
    }

    /// Fetch every employee in the store's natural order
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NoneFound` if the store is empty and
    ///   `empty_listing_is_error` is set
    pub async fn list_all(&self) -> Result<Vec<EmployeeView>, EmployeeError> {
        let views: Vec<EmployeeView> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(EmployeeView::from)
            .collect();

        if views.is_empty() && self.config.empty_listing_is_error {
            debug!("Store holds no employees");
            return Err(EmployeeError::NoneFound);
        }

        Ok(views)
    }

    /// Replace the names and role of an existing employee
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches the request's id
    pub async fn update(&self, request: UpdateEmployee) -> Result<EmployeeView, EmployeeError> {
        let existing = self.find_existing(&request.public_id).await?;
        let saved = self.repository.save(existing.with_changes(&request)).await?;

        info!(public_id = %saved.public_id(), "Updated employee");
        Ok(saved.view())
    }

    /// Delete an employee
    ///
    /// Lookup and removal are two separate store calls.
    ///
    /// # Errors
    ///
    /// - `EmployeeError::NotFound` if no record matches
    pub async fn delete(&self, public_id: &str) -> Result<(), EmployeeError> {
        let existing = self.find_existing(public_id).await?;
        self.repository
            .delete_by_public_id(existing.public_id().as_str())
            .await?;

        info!(public_id = %existing.public_id(), "Deleted employee");
        Ok(())
    }

    /// Get the service configuration
    pub fn config(&self) -> &EmployeeConfig {
        &self.config
    }

    async fn find_existing(&self, public_id: &str) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| EmployeeError::not_found(public_id))
    }
}

impl<R> EmployeeServicePort for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create(&self, request: CreateEmployee) -> Result<EmployeeView, EmployeeError> {
        EmployeeService::create(self, request).await
    }

    async fn get(&self, public_id: &str) -> Result<EmployeeView, EmployeeError> {
        EmployeeService::get(self, public_id).await
    }

    async fn list_all(&self) -> Result<Vec<EmployeeView>, EmployeeError> {
        EmployeeService::list_all(self).await
    }

    async fn update(&self, request: UpdateEmployee) -> Result<EmployeeView, EmployeeError> {
        EmployeeService::update(self, request).await
    }

    async fn delete(&self, public_id: &str) -> Result<(), EmployeeError> {
        EmployeeService::delete(self, public_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{EmployeeId, InternalKey};
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    const UUID_1: &str = "7fe7acdb-0bf4-428a-81ec-689fd2942084";
    const UUID_2: &str = "61c087ff-2810-48f5-945e-bf67a9f65ccf";
    const CREATED_1: &str = "2023-02-14T18:48:27.314759";

    // In-memory storage for testing, recording deletes
    #[derive(Default)]
    struct InMemoryStorage {
        records: Arc<Mutex<Vec<Employee>>>,
        deleted: Arc<Mutex<Vec<String>>>,
        next_key: Arc<Mutex<u64>>,
    }

    impl InMemoryStorage {
        fn with_record(employee: Employee) -> Self {
            let storage = Self::default();
            storage.records.lock().unwrap().push(employee);
            *storage.next_key.lock().unwrap() = 1;
            storage
        }
    }

    impl EmployeeRepository for InMemoryStorage {
        fn find_by_public_id(
            &self,
            public_id: &str,
        ) -> impl std::future::Future<Output = Result<Option<Employee>, EmployeeError>> + Send
        {
            let found = self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.public_id().as_str() == public_id)
                .cloned();

            async move { Ok(found) }
        }

        fn find_all(
            &self,
        ) -> impl std::future::Future<Output = Result<Vec<Employee>, EmployeeError>> + Send
        {
            let all = self.records.lock().unwrap().clone();

            async move { Ok(all) }
        }

        fn save(
            &self,
            mut employee: Employee,
        ) -> impl std::future::Future<Output = Result<Employee, EmployeeError>> + Send {
            let records = self.records.clone();
            let next_key = self.next_key.clone();

            async move {
                let mut records = records.lock().unwrap();
                match employee.key() {
                    Some(key) => match records.iter_mut().find(|e| e.key() == Some(key)) {
                        Some(slot) => *slot = employee.clone(),
                        None => return Err(EmployeeError::storage("unknown key")),
                    },
                    None => {
                        let mut next = next_key.lock().unwrap();
                        *next += 1;
                        employee.assign_key(InternalKey::new(*next));
                        records.push(employee.clone());
                    }
                }
                Ok(employee)
            }
        }

        fn delete_by_public_id(
            &self,
            public_id: &str,
        ) -> impl std::future::Future<Output = Result<(), EmployeeError>> + Send {
            let public_id = public_id.to_owned();
            let records = self.records.clone();
            let deleted = self.deleted.clone();

            async move {
                records
                    .lock()
                    .unwrap()
                    .retain(|e| e.public_id().as_str() != public_id);
                deleted.lock().unwrap().push(public_id);
                Ok(())
            }
        }
    }

    // Storage whose writes always fail
    struct FailingStorage;

    impl EmployeeRepository for FailingStorage {
        async fn find_by_public_id(&self, _: &str) -> Result<Option<Employee>, EmployeeError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
            Err(EmployeeError::storage("backend unavailable"))
        }

        async fn save(&self, _: Employee) -> Result<Employee, EmployeeError> {
            Err(EmployeeError::storage("backend unavailable"))
        }

        async fn delete_by_public_id(&self, _: &str) -> Result<(), EmployeeError> {
            Err(EmployeeError::storage("backend unavailable"))
        }
    }

    fn existing_employee() -> Employee {
        Employee::from_parts(
            Some(InternalKey::new(1)),
            EmployeeId::from(UUID_1),
            "John".to_string(),
            "Doe".to_string(),
            "Java Developer".to_string(),
            CREATED_1.parse::<NaiveDateTime>().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_success() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let request = CreateEmployee::new("John", "Doe", "Java Developer").with_id_hint("");
        let view = service.create(request).await.unwrap();

        assert!(!view.public_id.is_empty());
        assert_eq!(view.first_name, "John");
        assert_eq!(view.last_name, "Doe");
        assert_eq!(view.job_role, "Java Developer");
    }

    #[tokio::test]
    async fn test_create_issues_distinct_ids() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let first = service
            .create(CreateEmployee::new("John", "Doe", "Java Developer"))
            .await
            .unwrap();
        let second = service
            .create(CreateEmployee::new("Adam", "Smith", "Go Developer"))
            .await
            .unwrap();

        assert_ne!(first.public_id, second.public_id);
    }

    #[tokio::test]
    async fn test_create_ignores_unmatched_hint_for_assignment() {
        let service = EmployeeService::with_repository(InMemoryStorage::with_record(
            existing_employee(),
        ));

        let request = CreateEmployee::new("Adam", "Smith", "Go Developer").with_id_hint(UUID_2);
        let view = service.create(request).await.unwrap();

        assert_ne!(view.public_id.as_str(), UUID_2);
        assert_ne!(view.public_id.as_str(), UUID_1);
    }

    #[tokio::test]
    async fn test_create_with_existing_hint_fails() {
        let service = EmployeeService::with_repository(InMemoryStorage::with_record(
            existing_employee(),
        ));

        let request = CreateEmployee::new("John", "Doe", "Java Developer").with_id_hint(UUID_1);
        let result = service.create(request).await;

        assert_eq!(result.unwrap_err(), EmployeeError::already_exists(UUID_1));
    }

    #[tokio::test]
    async fn test_create_storage_failure() {
        let service = EmployeeService::with_repository(FailingStorage);

        let result = service
            .create(CreateEmployee::new("John", "Doe", "Java Developer"))
            .await;

        assert!(matches!(result.unwrap_err(), EmployeeError::Storage(_)));
    }

    #[tokio::test]
    async fn test_get_existing() {
        let service = EmployeeService::with_repository(InMemoryStorage::with_record(
            existing_employee(),
        ));

        let view = service.get(UUID_1).await.unwrap();

        assert_eq!(view, existing_employee().view());
        assert_eq!(view.created_at.to_string(), "2023-02-14 18:48:27.314759");
    }

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let service = EmployeeService::with_repository(InMemoryStorage::with_record(
            existing_employee(),
        ));

        let first = service.get(UUID_1).await.unwrap();
        let second = service.get(UUID_1).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_missing_fails() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let err = service.get(UUID_1).await.unwrap_err();

        assert_eq!(err, EmployeeError::not_found(UUID_1));
    }

    #[tokio::test]
    async fn test_get_empty_id_has_distinct_message() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let empty = service.get("").await.unwrap_err();
        let missing = service.get(UUID_2).await.unwrap_err();

        assert!(matches!(empty, EmployeeError::NotFound(_)));
        assert_ne!(empty.to_string(), missing.to_string());
        assert!(empty.to_string().contains("of empty string"));
    }

    #[tokio::test]
    async fn test_list_all_empty_store_fails() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let err = service.list_all().await.unwrap_err();

        assert_eq!(err, EmployeeError::NoneFound);
    }

    #[tokio::test]
    async fn test_list_all_empty_store_allowed_by_config() {
        let config = EmployeeConfig {
            empty_listing_is_error: false,
        };
        let service = EmployeeService::new(InMemoryStorage::default(), config);

        let views = service.list_all().await.unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_after_one_create() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let created = service
            .create(CreateEmployee::new("John", "Doe", "Java Developer"))
            .await
            .unwrap();
        let views = service.list_all().await.unwrap();

        assert_eq!(views, vec![created]);
    }

    #[tokio::test]
    async fn test_update_preserves_identity_and_creation_time() {
        let storage = InMemoryStorage::with_record(existing_employee());
        let records = storage.records.clone();
        let service = EmployeeService::with_repository(storage);

        let view = service
            .update(UpdateEmployee::new(UUID_1, "Adam", "Smith", "Go Developer"))
            .await
            .unwrap();

        assert_eq!(view.public_id.as_str(), UUID_1);
        assert_eq!(view.created_at, *existing_employee().created_at());
        assert_eq!(view.first_name, "Adam");
        assert_eq!(view.last_name, "Smith");
        assert_eq!(view.job_role, "Go Developer");

        let stored = records.lock().unwrap();
        assert_eq!(stored.len(), 1, "update must replace in place");
        assert_eq!(stored[0].key(), Some(InternalKey::new(1)));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let err = service
            .update(UpdateEmployee::new(UUID_1, "Adam", "Smith", "Go Developer"))
            .await
            .unwrap_err();

        assert_eq!(err, EmployeeError::not_found(UUID_1));
    }

    #[tokio::test]
    async fn test_update_empty_id_has_distinct_message() {
        let service = EmployeeService::with_repository(InMemoryStorage::default());

        let err = service
            .update(UpdateEmployee::new("", "Adam", "Smith", "Go Developer"))
            .await
            .unwrap_err();

        assert_eq!(err, EmployeeError::not_found(""));
        assert_eq!(err.to_string(), "employee with uuid of empty string not found");
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let storage = InMemoryStorage::with_record(existing_employee());
        let deleted = storage.deleted.clone();
        let service = EmployeeService::with_repository(storage);

        service.delete(UUID_1).await.unwrap();

        assert_eq!(*deleted.lock().unwrap(), vec![UUID_1.to_string()]);
        assert!(matches!(
            service.get(UUID_1).await.unwrap_err(),
            EmployeeError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_fails_without_store_delete() {
        let storage = InMemoryStorage::default();
        let deleted = storage.deleted.clone();
        let service = EmployeeService::with_repository(storage);

        let err = service.delete(UUID_1).await.unwrap_err();

        assert_eq!(err, EmployeeError::not_found(UUID_1));
        assert!(deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_empty_id_has_distinct_message() {
        let storage = InMemoryStorage::default();
        let deleted = storage.deleted.clone();
        let service = EmployeeService::with_repository(storage);

        let err = service.delete("").await.unwrap_err();

        assert_eq!(err.to_string(), "employee with uuid of empty string not found");
        assert!(deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_usable_through_port() {
        async fn count<S: EmployeeServicePort>(service: &S) -> usize {
            service.list_all().await.map(|v| v.len()).unwrap_or(0)
        }

        let service = Arc::new(EmployeeService::with_repository(
            InMemoryStorage::with_record(existing_employee()),
        ));

        assert_eq!(count(&service).await, 1);
    }
}
