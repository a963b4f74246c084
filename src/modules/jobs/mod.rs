pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod realtime;
pub mod routes;

// Re-export commonly used types
pub use application::JobUseCases;
pub use domain::{Job, JobChange, JobRepository, PublicJob};
pub use realtime::{JobsMirror, MirrorScope};
