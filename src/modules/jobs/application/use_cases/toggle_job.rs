use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::jobs::application::ports::JobRepository;
use crate::modules::jobs::domain::{Job, JobUpdate};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

#[derive(Debug, Clone, Copy)]
pub struct ToggleJobCommand {
    pub id: Uuid,
}

impl ToggleJobCommand {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Flips a posting's active flag
///
/// This is a read followed by a write with no conflict detection: two
/// concurrent toggles on the same id can both read the same starting state
/// and both write the same flipped value, so the pair behaves like a single
/// toggle. Sequential callers always see `toggle(toggle(x)) == x`. Making it
/// atomic needs a conditional update (or a row version) at the store.
pub struct ToggleJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl ToggleJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<ToggleJobCommand, Option<Job>> for ToggleJobHandler {
    async fn execute(&self, command: ToggleJobCommand) -> AppResult<Option<Job>> {
        let Some(job) = self.repository.find_by_id(command.id).await? else {
            return Ok(None);
        };

        let next = !job.is_active;
        log_debug!("Toggling job {} active: {} -> {}", job.id, job.is_active, next);

        self.repository
            .update(command.id, JobUpdate::set_active(next))
            .await
    }
}
