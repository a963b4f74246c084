/// Repository port for job postings
///
/// The use-case layer talks to storage only through this trait; exactly one
/// adapter is wired at a time. "Not found" is an ordinary outcome here
/// (`None` / `false`), never an error.
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::{Job, JobUpdate, NewJob};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// All jobs, newest first
    async fn find_all(&self) -> AppResult<Vec<Job>>;

    /// Active jobs only, newest first
    async fn find_active(&self) -> AppResult<Vec<Job>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>>;

    /// Persist a new job; the store assigns id and timestamps
    async fn create(&self, job: NewJob) -> AppResult<Job>;

    /// Apply a partial update. An empty update performs no write.
    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>>;

    /// `true` if a row existed and was removed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
