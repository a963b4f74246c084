pub mod broadcast_feed;
pub mod notifying_repository;

pub use broadcast_feed::BroadcastChangeFeed;
pub use notifying_repository::NotifyingJobRepository;
