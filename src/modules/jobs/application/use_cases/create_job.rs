use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::{Job, NewJob};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

/// Command for publishing a new posting; the payload is already validated
#[derive(Debug, Clone)]
pub struct CreateJobCommand {
    pub job: NewJob,
}

impl CreateJobCommand {
    pub fn new(job: NewJob) -> Self {
        Self { job }
    }
}

pub struct CreateJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl CreateJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<CreateJobCommand, Job> for CreateJobHandler {
    async fn execute(&self, command: CreateJobCommand) -> AppResult<Job> {
        self.repository.create(command.job).await
    }
}
