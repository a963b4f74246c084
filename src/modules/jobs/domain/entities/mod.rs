pub mod job;

pub use job::{Job, JobUpdate, NewJob, PublicJob};
