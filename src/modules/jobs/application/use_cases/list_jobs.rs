use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::Job;
use crate::shared::{application::use_case::Query, errors::AppResult};

/// Every posting, newest first (admin view)
#[derive(Debug, Clone, Copy, Default)]
pub struct ListJobsQuery;

pub struct ListJobsHandler {
    repository: Arc<dyn JobRepository>,
}

impl ListJobsHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<ListJobsQuery, Vec<Job>> for ListJobsHandler {
    async fn execute(&self, _query: ListJobsQuery) -> AppResult<Vec<Job>> {
        self.repository.find_all().await
    }
}
