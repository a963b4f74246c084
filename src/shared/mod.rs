// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool)
pub mod utils; // Shared utilities (logging)
pub mod validation; // Field-level validation results

pub use config::AppConfig;
pub use infrastructure::database::Database;
