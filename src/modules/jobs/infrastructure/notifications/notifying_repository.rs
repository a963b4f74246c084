use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::application::ports::ChangePublisher;
use crate::modules::jobs::domain::{Job, JobChange, JobRepository, JobUpdate, NewJob};
use crate::shared::errors::AppResult;

/// Decorator that announces every committed mutation on a change feed
///
/// Wraps any JobRepository; reads pass straight through. A notification is
/// published only after the inner write succeeded and actually touched a row.
pub struct NotifyingJobRepository {
    inner: Arc<dyn JobRepository>,
    publisher: Arc<dyn ChangePublisher>,
}

impl NotifyingJobRepository {
    pub fn new(inner: Arc<dyn JobRepository>, publisher: Arc<dyn ChangePublisher>) -> Self {
        Self { inner, publisher }
    }
}

#[async_trait]
impl JobRepository for NotifyingJobRepository {
    async fn find_all(&self) -> AppResult<Vec<Job>> {
        self.inner.find_all().await
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        self.inner.find_active().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, job: NewJob) -> AppResult<Job> {
        let created = self.inner.create(job).await?;
        self.publisher.publish(JobChange::inserted(created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>> {
        let wrote = !update.is_empty();
        let updated = self.inner.update(id, update).await?;
        if wrote && updated.is_some() {
            self.publisher.publish(JobChange::updated(id));
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.inner.delete(id).await?;
        if deleted {
            self.publisher.publish(JobChange::deleted(id));
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::repository::MockJobRepository;
    use crate::modules::jobs::domain::JobDraft;
    use crate::shared::errors::AppError;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<JobChange>>,
    }

    impl ChangePublisher for RecordingPublisher {
        fn publish(&self, change: JobChange) {
            self.published.lock().unwrap().push(change);
        }
    }

    #[tokio::test]
    async fn delete_publishes_only_when_a_row_was_removed() {
        let mut inner = MockJobRepository::new();
        let mut results = vec![false, true].into_iter();
        inner
            .expect_delete()
            .times(2)
            .returning(move |_| Ok(results.next().unwrap_or(false)));
        let publisher = Arc::new(RecordingPublisher::default());
        let repo = NotifyingJobRepository::new(Arc::new(inner), publisher.clone());

        let id = Uuid::new_v4();
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.delete(id).await.unwrap());

        assert_eq!(*publisher.published.lock().unwrap(), vec![JobChange::deleted(id)]);
    }

    #[tokio::test]
    async fn failed_write_publishes_nothing() {
        let mut inner = MockJobRepository::new();
        inner
            .expect_update()
            .returning(|_, _| Err(AppError::Persistence("deadlock detected".to_string())));
        let publisher = Arc::new(RecordingPublisher::default());
        let repo = NotifyingJobRepository::new(Arc::new(inner), publisher.clone());

        let result = repo.update(Uuid::new_v4(), JobUpdate::set_active(true)).await;

        assert!(result.is_err());
        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_update_is_not_announced() {
        let current = JobDraft {
            title: "Finance Analyst".to_string(),
            team: "Finance".to_string(),
            location: "Lagos, Nigeria".to_string(),
            employment_type: "Full-time".to_string(),
            level: "Junior".to_string(),
            description: "Keep the books balanced.".to_string(),
            requirements: vec!["Excel".to_string()],
            responsibilities: vec!["Monthly close".to_string()],
        }
        .validate()
        .unwrap()
        .into_job(Uuid::new_v4(), Utc::now());
        let id = current.id;
        let returned = current.clone();

        // The row exists, so only the empty update itself can suppress the notification
        let mut inner = MockJobRepository::new();
        inner
            .expect_update()
            .returning(move |_, _| Ok(Some(returned.clone())));
        let publisher = Arc::new(RecordingPublisher::default());
        let repo = NotifyingJobRepository::new(Arc::new(inner), publisher.clone());

        let result = repo.update(id, JobUpdate::empty()).await.unwrap();

        assert_eq!(result, Some(current));
        assert!(publisher.published.lock().unwrap().is_empty());
    }
}
