use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::modules::jobs::domain::JobChange;
use crate::shared::errors::AppResult;

/// Stream of change notifications. An `Err` item is a transport failure;
/// the end of the stream means the feed was dropped.
pub type ChangeStream = BoxStream<'static, AppResult<JobChange>>;

/// Port (interface) for announcing committed mutations
pub trait ChangePublisher: Send + Sync {
    /// Best effort; a notification with no listeners is simply discarded
    fn publish(&self, change: JobChange);
}

/// Port (interface) for listening to the job collection's change feed
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    async fn subscribe(&self) -> AppResult<ChangeStream>;
}
