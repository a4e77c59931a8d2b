//! In-memory todo repository.
//!
//! # Responsibility
//! - Provide a process-local adapter for tests, smoke binaries, and callers
//!   that do not need durable storage.
//!
//! # Invariants
//! - Storage is an owned container constructed with the adapter, never a
//!   module-level singleton.
//! - Each trait call takes and releases the lock once, so single-item
//!   atomicity holds per operation.

use crate::model::todo::Todo;
use crate::repo::todo_repo::{RepoError, RepoResult, TodoRepository};
use std::sync::{Mutex, MutexGuard};

/// Todo repository backed by an in-process list.
#[derive(Debug, Default)]
pub struct MemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing entities, e.g. for tests.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<Todo>>> {
        self.todos
            .lock()
            .map_err(|_| RepoError::Storage("todo store lock poisoned".to_string()))
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn find_all(&self) -> RepoResult<Vec<Todo>> {
        Ok(self.lock()?.clone())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Todo>> {
        Ok(self.lock()?.iter().find(|todo| todo.id == id).cloned())
    }

    fn create(&self, todo: &Todo) -> RepoResult<Todo> {
        let mut todos = self.lock()?;
        if todos.iter().any(|existing| existing.id == todo.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate todo id `{}`",
                todo.id
            )));
        }
        todos.push(todo.clone());
        Ok(todo.clone())
    }

    fn update(&self, todo: &Todo) -> RepoResult<Todo> {
        let mut todos = self.lock()?;
        match todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(slot) => {
                *slot = todo.clone();
                Ok(todo.clone())
            }
            None => Err(RepoError::NotFound(todo.id.clone())),
        }
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut todos = self.lock()?;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            return Err(RepoError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
