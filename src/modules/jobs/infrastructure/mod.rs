pub mod notifications;
pub mod persistence;

pub use notifications::{BroadcastChangeFeed, NotifyingJobRepository};
pub use persistence::{InMemoryJobRepository, JobRepositoryImpl};
