use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::Job;
use crate::shared::{application::use_case::Query, errors::AppResult};

/// Active postings only, newest first (public listing)
#[derive(Debug, Clone, Copy, Default)]
pub struct ListActiveJobsQuery;

pub struct ListActiveJobsHandler {
    repository: Arc<dyn JobRepository>,
}

impl ListActiveJobsHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<ListActiveJobsQuery, Vec<Job>> for ListActiveJobsHandler {
    async fn execute(&self, _query: ListActiveJobsQuery) -> AppResult<Vec<Job>> {
        self.repository.find_active().await
    }
}
