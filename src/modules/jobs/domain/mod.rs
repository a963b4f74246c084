pub mod entities;
pub mod events;
pub mod repository;
pub mod validation;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Job, JobUpdate, NewJob, PublicJob};
pub use events::{ChangeKind, JobChange};
pub use repository::JobRepository;
pub use validation::{JobDraft, JobPatchDraft};
pub use value_objects::{EmploymentType, FieldUpdate, Location, SeniorityLevel, Team};
