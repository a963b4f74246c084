use std::sync::Arc;
use uuid::Uuid;

use super::ports::JobRepository;
use super::use_cases::*;
use crate::modules::jobs::domain::{Job, JobUpdate, NewJob};
use crate::shared::application::use_case::{Query, UseCase};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// The job use cases wired against one repository
///
/// This is the single mutation boundary the transport layer sees. Failures
/// from the repository pass through unchanged; "not found" stays an absent
/// result.
pub struct JobUseCases {
    list_jobs: ListJobsHandler,
    list_active_jobs: ListActiveJobsHandler,
    get_job: GetJobHandler,
    create_job: CreateJobHandler,
    update_job: UpdateJobHandler,
    delete_job: DeleteJobHandler,
    toggle_job: ToggleJobHandler,
}

impl JobUseCases {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self {
            list_jobs: ListJobsHandler::new(Arc::clone(&repository)),
            list_active_jobs: ListActiveJobsHandler::new(Arc::clone(&repository)),
            get_job: GetJobHandler::new(Arc::clone(&repository)),
            create_job: CreateJobHandler::new(Arc::clone(&repository)),
            update_job: UpdateJobHandler::new(Arc::clone(&repository)),
            delete_job: DeleteJobHandler::new(Arc::clone(&repository)),
            toggle_job: ToggleJobHandler::new(repository),
        }
    }

    pub async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let timer = TimedOperation::new("list_jobs");
        let jobs = self.list_jobs.execute(ListJobsQuery).await?;
        timer.finish_with_info(&format!("{} jobs", jobs.len()));
        Ok(jobs)
    }

    pub async fn list_active_jobs(&self) -> AppResult<Vec<Job>> {
        let timer = TimedOperation::new("list_active_jobs");
        let jobs = self.list_active_jobs.execute(ListActiveJobsQuery).await?;
        timer.finish_with_info(&format!("{} jobs", jobs.len()));
        Ok(jobs)
    }

    pub async fn get_job(&self, id: Uuid) -> AppResult<Option<Job>> {
        self.get_job.execute(GetJobQuery::new(id)).await
    }

    pub async fn create_job(&self, job: NewJob) -> AppResult<Job> {
        let created = self.create_job.execute(CreateJobCommand::new(job)).await?;
        LogContext::job_mutation("created", &created.id);
        Ok(created)
    }

    pub async fn update_job(&self, id: Uuid, update: JobUpdate) -> AppResult<Option<Job>> {
        let updated = self
            .update_job
            .execute(UpdateJobCommand::new(id, update))
            .await?;
        if updated.is_some() {
            LogContext::job_mutation("updated", &id);
        }
        Ok(updated)
    }

    pub async fn delete_job(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.delete_job.execute(DeleteJobCommand::new(id)).await?;
        if deleted {
            LogContext::job_mutation("deleted", &id);
        }
        Ok(deleted)
    }

    pub async fn toggle_job(&self, id: Uuid) -> AppResult<Option<Job>> {
        let toggled = self.toggle_job.execute(ToggleJobCommand::new(id)).await?;
        if let Some(job) = &toggled {
            LogContext::job_mutation(if job.is_active { "activated" } else { "deactivated" }, &id);
        }
        Ok(toggled)
    }
}
