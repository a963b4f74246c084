use crate::shared::errors::AppResult;
/// Base traits for all use cases following CQRS pattern
///
/// Commands mutate through a repository port, queries only read from it.
/// Handlers hold nothing but their injected ports.
///
/// # Example
///
/// ```rust,ignore
/// struct DeleteJobCommand {
///     id: Uuid,
/// }
///
/// struct DeleteJobHandler {
///     repository: Arc<dyn JobRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<DeleteJobCommand, bool> for DeleteJobHandler {
///     async fn execute(&self, command: DeleteJobCommand) -> AppResult<bool> {
///         self.repository.delete(command.id).await
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
