use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::Job;
use crate::shared::{application::use_case::Query, errors::AppResult};

#[derive(Debug, Clone, Copy)]
pub struct GetJobQuery {
    pub id: Uuid,
}

impl GetJobQuery {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct GetJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl GetJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<GetJobQuery, Option<Job>> for GetJobHandler {
    async fn execute(&self, query: GetJobQuery) -> AppResult<Option<Job>> {
        self.repository.find_by_id(query.id).await
    }
}
