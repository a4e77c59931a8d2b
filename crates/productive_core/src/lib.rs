//! Core domain logic for the Productive todo application.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{CreateTodoRequest, Priority, Todo, TodoId, UpdateTodoRequest};
pub use repo::memory_repo::MemoryTodoRepository;
pub use repo::todo_repo::{RepoError, RepoResult, SqliteTodoRepository, TodoRepository};
pub use service::todo_service::{TodoService, UseCaseError, UseCaseResult};
pub use validate::ValidationError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
