/// In-process change feed over a tokio broadcast channel
///
/// Delivery is best effort: a subscriber that falls behind by more than the
/// channel capacity loses the overflowed notifications and receives a single
/// `Resync` change instead.
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::modules::jobs::application::ports::{ChangeFeed, ChangePublisher, ChangeStream};
use crate::modules::jobs::domain::JobChange;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};

pub struct BroadcastChangeFeed {
    sender: broadcast::Sender<JobChange>,
}

impl BroadcastChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ChangePublisher for BroadcastChangeFeed {
    fn publish(&self, change: JobChange) {
        match self.sender.send(change) {
            Ok(receivers) => log_debug!("Change published to {} subscriber(s)", receivers),
            Err(broadcast::error::SendError(change)) => {
                log_debug!("No subscribers for change {}", change)
            }
        }
    }
}

#[async_trait]
impl ChangeFeed for BroadcastChangeFeed {
    async fn subscribe(&self) -> AppResult<ChangeStream> {
        let receiver = self.sender.subscribe();

        let changes = stream::unfold(receiver, |mut receiver| async move {
            match receiver.recv().await {
                Ok(change) => Some((Ok(change), receiver)),
                Err(RecvError::Lagged(missed)) => {
                    log_warn!("Change subscriber lagged, {} notification(s) dropped", missed);
                    Some((Ok(JobChange::resync()), receiver))
                }
                Err(RecvError::Closed) => None,
            }
        });

        Ok(changes.boxed())
    }
}
