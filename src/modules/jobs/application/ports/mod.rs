pub mod change_feed;

pub use change_feed::{ChangeFeed, ChangePublisher, ChangeStream};
pub use crate::modules::jobs::domain::repository::JobRepository;
