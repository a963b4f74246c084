use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::{Job, JobUpdate};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

#[derive(Debug, Clone)]
pub struct UpdateJobCommand {
    pub id: Uuid,
    pub update: JobUpdate,
}

impl UpdateJobCommand {
    pub fn new(id: Uuid, update: JobUpdate) -> Self {
        Self { id, update }
    }
}

pub struct UpdateJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl UpdateJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateJobCommand, Option<Job>> for UpdateJobHandler {
    async fn execute(&self, command: UpdateJobCommand) -> AppResult<Option<Job>> {
        self.repository.update(command.id, command.update).await
    }
}
