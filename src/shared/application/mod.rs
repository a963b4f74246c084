/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// bounded contexts.
pub mod use_case;

pub use use_case::{Query, UseCase};
