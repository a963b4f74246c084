/// Job repository tests - database operations
///
/// Run with `cargo test -- --ignored` and TEST_DATABASE_URL set.
///
/// Tests cover:
/// - Basic CRUD operations
/// - Store-assigned timestamps and the update trigger
/// - Query ordering and filtering
mod utils;

use jobboard_lib::modules::jobs::domain::{JobPatchDraft, JobRepository, JobUpdate};
use jobboard_lib::modules::jobs::infrastructure::JobRepositoryImpl;
use utils::db;
use utils::factories::JobDraftFactory;

fn repository() -> JobRepositoryImpl {
    JobRepositoryImpl::new(db::get_test_database())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_and_retrieve_job() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let repo = repository();

    let payload = JobDraftFactory::backend_engineer().build();
    let created = repo.create(payload.clone()).await.unwrap();
    assert!(created.is_active);
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(retrieved.matches_payload(&payload));
    assert_eq!(retrieved.id, created.id);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn listings_are_newest_first_and_filtered() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let repo = repository();

    let first = repo.create(JobDraftFactory::new("First").build()).await.unwrap();
    let second = repo.create(JobDraftFactory::new("Second").build()).await.unwrap();
    repo.update(first.id, JobUpdate::set_active(false)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let active = repo.find_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn update_touches_only_given_fields_and_restamps() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let repo = repository();

    let job = repo.create(JobDraftFactory::backend_engineer().build()).await.unwrap();
    let changes = JobPatchDraft {
        requirements: Some(vec!["Rust".to_string(), "PostgreSQL".to_string()]),
        ..Default::default()
    }
    .validate()
    .unwrap();

    let updated = repo.update(job.id, changes).await.unwrap().unwrap();
    assert_eq!(updated.requirements, vec!["Rust", "PostgreSQL"]);
    assert_eq!(updated.title, job.title);
    assert_eq!(updated.created_at, job.created_at);
    assert!(updated.updated_at >= job.updated_at);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn empty_update_and_missing_rows() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let repo = repository();

    let job = repo.create(JobDraftFactory::backend_engineer().build()).await.unwrap();
    let unchanged = repo.update(job.id, JobUpdate::empty()).await.unwrap();
    assert_eq!(unchanged, Some(job.clone()));

    let missing = uuid::Uuid::new_v4();
    assert_eq!(repo.find_by_id(missing).await.unwrap(), None);
    assert_eq!(repo.update(missing, JobUpdate::set_active(false)).await.unwrap(), None);
    assert!(!repo.delete(missing).await.unwrap());

    assert!(repo.delete(job.id).await.unwrap());
    assert!(!repo.delete(job.id).await.unwrap());
    assert_eq!(repo.find_by_id(job.id).await.unwrap(), None);
}
