pub mod in_memory_repository;
pub mod job_repository_impl;
pub mod mapper;
pub mod models;

pub use in_memory_repository::InMemoryJobRepository;
pub use job_repository_impl::JobRepositoryImpl;
