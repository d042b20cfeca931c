//! Record store behaviour, alone and behind the employee service

use chrono::NaiveDateTime;
use rollcall_domain::{
    CreateEmployee, Employee, EmployeeError, EmployeeId, EmployeeRepository, EmployeeService,
    UpdateEmployee,
};
use rollcall_memstore::InMemoryEmployeeRepository;

const UUID_1: &str = "7fe7acdb-0bf4-428a-81ec-689fd2942084";
const CREATED_1: &str = "2023-02-14T18:48:27.314759";

fn sample_employee() -> Employee {
    Employee::from_parts(
        None,
        EmployeeId::from(UUID_1),
        "John".to_string(),
        "Doe".to_string(),
        "Java Developer".to_string(),
        CREATED_1.parse::<NaiveDateTime>().unwrap(),
    )
}

#[tokio::test]
async fn test_find_by_public_id_after_save() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(sample_employee()).await.unwrap();

    let found = repo.find_by_public_id(UUID_1).await.unwrap();

    assert!(found.is_some());
    assert_eq!(found.unwrap().first_name(), "John");
}

#[tokio::test]
async fn test_find_by_public_id_on_empty_store() {
    let repo = InMemoryEmployeeRepository::new();

    let found = repo.find_by_public_id(UUID_1).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_save_returns_persisted_record() {
    let repo = InMemoryEmployeeRepository::new();

    let saved = repo.save(sample_employee()).await.unwrap();

    assert!(saved.is_persisted());
    assert!(saved.key().unwrap().get() > 0);
}

#[tokio::test]
async fn test_save_keyed_record_updates_in_place() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(sample_employee()).await.unwrap();

    let stored = repo.find_by_public_id(UUID_1).await.unwrap().unwrap();
    let changes = UpdateEmployee::new(UUID_1, "Adam", "Smith", "Go Developer");
    let updated = repo.save(stored.with_changes(&changes)).await.unwrap();

    assert_eq!(updated.first_name(), "Adam");
    assert_eq!(updated.last_name(), "Smith");
    assert_eq!(updated.job_role(), "Go Developer");
    assert_eq!(updated.key(), stored.key());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_all_returns_creation_order() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(sample_employee()).await.unwrap();
    repo.save(Employee::new("Adam", "Smith", "Go Developer"))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].public_id().as_str(), UUID_1);
    assert_eq!(all[1].first_name(), "Adam");
}

#[tokio::test]
async fn test_delete_by_public_id_removes_record() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(sample_employee()).await.unwrap();

    repo.delete_by_public_id(UUID_1).await.unwrap();

    assert!(repo.find_by_public_id(UUID_1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_full_lifecycle_through_service() {
    let repo = InMemoryEmployeeRepository::new();
    let service = EmployeeService::with_repository(repo.clone());

    assert_eq!(service.list_all().await.unwrap_err(), EmployeeError::NoneFound);

    let created = service
        .create(CreateEmployee::new("John", "Doe", "Java Developer"))
        .await
        .unwrap();
    let id = created.public_id.as_str().to_owned();

    assert_eq!(service.list_all().await.unwrap(), vec![created.clone()]);
    assert_eq!(service.get(&id).await.unwrap(), created);

    let duplicate = service
        .create(CreateEmployee::new("John", "Doe", "Java Developer").with_id_hint(id.clone()))
        .await;
    assert_eq!(duplicate.unwrap_err(), EmployeeError::already_exists(id.clone()));

    let updated = service
        .update(UpdateEmployee::new(id.clone(), "Adam", "Smith", "Go Developer"))
        .await
        .unwrap();
    assert_eq!(updated.public_id, created.public_id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.first_name, "Adam");

    service.delete(&id).await.unwrap();
    assert_eq!(
        service.delete(&id).await.unwrap_err(),
        EmployeeError::not_found(id.clone())
    );
    assert!(repo.is_empty().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let repo = InMemoryEmployeeRepository::new();
    let service = std::sync::Arc::new(EmployeeService::with_repository(repo.clone()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(CreateEmployee::new(format!("Name{i}"), "Doe", "Tester"))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().public_id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 16);
    assert_eq!(repo.len().await, 16);
}
