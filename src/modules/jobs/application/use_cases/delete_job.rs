use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::application::ports::JobRepository;
use crate::shared::{application::use_case::UseCase, errors::AppResult};

#[derive(Debug, Clone, Copy)]
pub struct DeleteJobCommand {
    pub id: Uuid,
}

impl DeleteJobCommand {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct DeleteJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl DeleteJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<DeleteJobCommand, bool> for DeleteJobHandler {
    /// `false` when no such job existed
    async fn execute(&self, command: DeleteJobCommand) -> AppResult<bool> {
        self.repository.delete(command.id).await
    }
}
