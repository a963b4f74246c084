pub mod create_job;
pub mod delete_job;
pub mod get_job;
pub mod list_active_jobs;
pub mod list_jobs;
pub mod toggle_job;
pub mod update_job;

pub use create_job::{CreateJobCommand, CreateJobHandler};
pub use delete_job::{DeleteJobCommand, DeleteJobHandler};
pub use get_job::{GetJobHandler, GetJobQuery};
pub use list_active_jobs::{ListActiveJobsHandler, ListActiveJobsQuery};
pub use list_jobs::{ListJobsHandler, ListJobsQuery};
pub use toggle_job::{ToggleJobCommand, ToggleJobHandler};
pub use update_job::{UpdateJobCommand, UpdateJobHandler};
