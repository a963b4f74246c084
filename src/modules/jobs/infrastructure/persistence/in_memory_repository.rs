/// In-process implementation of JobRepository
///
/// Used by tests and by local runs without PostgreSQL. It behaves like the
/// store: it assigns v4 ids and strictly increasing timestamps, so ordering
/// by creation time is total.
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::jobs::domain::{Job, JobRepository, JobUpdate, NewJob};
use crate::shared::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: DashMap<Uuid, Job>,
    clock: Mutex<Option<DateTime<Utc>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Next timestamp, never equal to or earlier than the previous one
    fn stamp(&self) -> AppResult<DateTime<Utc>> {
        let mut last = self
            .clock
            .lock()
            .map_err(|_| AppError::Internal("In-memory clock poisoned".to_string()))?;
        let now = Utc::now();
        let next = match *last {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(next);
        Ok(next)
    }

    fn ordered(&self, active_only: bool) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .jobs
            .iter()
            .filter(|entry| !active_only || entry.is_active)
            .map(|entry| entry.value().clone())
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        jobs
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_all(&self) -> AppResult<Vec<Job>> {
        Ok(self.ordered(false))
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        Ok(self.ordered(true))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        Ok(self.jobs.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, job: NewJob) -> AppResult<Job> {
        let created = job.into_job(Uuid::new_v4(), self.stamp()?);
        self.jobs.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>> {
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        let stamped_at = self.stamp()?;
        let Some(mut entry) = self.jobs.get_mut(&id) else {
            return Ok(None);
        };
        let job = entry.value_mut();
        update.apply_to(job);
        job.updated_at = stamped_at.max(job.created_at);
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.jobs.remove(&id).is_some())
    }
}
