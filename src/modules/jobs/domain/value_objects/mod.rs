pub mod employment_type;
pub mod field_update;
pub mod location;
pub mod seniority_level;
pub mod team;

pub use employment_type::EmploymentType;
pub use field_update::FieldUpdate;
pub use location::Location;
pub use seniority_level::SeniorityLevel;
pub use team::Team;
