//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract the use-case layer depends on.
//! - Keep SQL and container details out of business orchestration.
//!
//! # Invariants
//! - Legitimate absence is `Ok(None)` from `find_by_id`, never an error.
//! - `update`/`delete` on an unknown id signal `RepoError::NotFound`.
//! - Adapters are interchangeable behind `TodoRepository`.

pub mod memory_repo;
pub mod todo_repo;
