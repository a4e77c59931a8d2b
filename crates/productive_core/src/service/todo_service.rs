//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the five todo lifecycle operations: create, get-all, update,
//!   toggle, delete.
//! - Convert every failure into a two-variant result; no error type from a
//!   lower layer crosses this boundary.
//!
//! # Invariants
//! - Validation and not-found checks run before any repository mutation.
//! - Repository failures are logged here and surfaced as one generic
//!   message per operation; the underlying cause is never re-thrown.
//! - The list ordering policy is recomputed on every `get_all_todos` call.

use crate::clock::{Clock, SystemClock};
use crate::mapper;
use crate::model::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::repo::todo_repo::{RepoError, TodoRepository};
use crate::validate::{validate_create, validate_id, validate_update, ValidationError};
use log::{debug, error, info};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CREATE_FAILED: &str = "Failed to create todo";
const FETCH_FAILED: &str = "Failed to fetch todos";
const UPDATE_FAILED: &str = "Failed to update todo";
const TOGGLE_FAILED: &str = "Failed to toggle todo";
const DELETE_FAILED: &str = "Failed to delete todo";

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Failure variant of every use-case result.
///
/// `Display` output is the user-facing message callers surface directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// A field rule was violated; carries the rule's own message.
    Validation(ValidationError),
    /// The targeted id is absent from the repository.
    NotFound,
    /// The repository call itself failed; carries the generic per-operation
    /// message, never the underlying cause.
    Repository(&'static str),
}

impl Display for UseCaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound => f.write_str("Todo not found"),
            Self::Repository(message) => f.write_str(message),
        }
    }
}

impl Error for UseCaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound | Self::Repository(_) => None,
        }
    }
}

impl From<ValidationError> for UseCaseError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Stateless orchestrator over one repository and one clock.
///
/// Holds no todo state of its own; every invocation is request/response.
pub struct TodoService<R: TodoRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service over the wall clock.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: SystemClock,
        }
    }
}

impl<R: TodoRepository, C: Clock> TodoService<R, C> {
    /// Creates a service with an explicit clock, e.g. for deterministic tests.
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Creates one todo from a validated payload.
    ///
    /// Assigns a fresh UUID v4 id and stamps both audit fields with the same
    /// instant. Side effect: one new entity persisted.
    pub fn create_todo(&self, request: &CreateTodoRequest) -> UseCaseResult<Todo> {
        let now_ms = self.clock.now_epoch_ms();
        validate_create(request, now_ms)?;

        let id = uuid::Uuid::new_v4().to_string();
        let todo = mapper::from_create(request, id, now_ms);

        match self.repo.create(&todo) {
            Ok(created) => {
                info!(
                    "event=todo_create module=service status=ok id={}",
                    created.id
                );
                Ok(created)
            }
            Err(err) => Err(repo_failure("todo_create", CREATE_FAILED, &err)),
        }
    }

    /// Lists all todos in presentation order.
    ///
    /// Ordering policy: incomplete todos first, then completed ones; within
    /// each partition ascending by due date, undated todos last. Recomputed
    /// on every call over whatever the adapter returns.
    pub fn get_all_todos(&self) -> UseCaseResult<Vec<Todo>> {
        match self.repo.find_all() {
            Ok(todos) => {
                let sorted = sort_todos(todos);
                debug!(
                    "event=todo_list module=service status=ok count={}",
                    sorted.len()
                );
                Ok(sorted)
            }
            Err(err) => Err(repo_failure("todo_list", FETCH_FAILED, &err)),
        }
    }

    /// Applies a partial update to one todo.
    ///
    /// Fails fast on a blank id, then on an unknown id, then on field rules;
    /// only then is a new snapshot persisted.
    pub fn update_todo(&self, id: &str, request: &UpdateTodoRequest) -> UseCaseResult<Todo> {
        validate_id(id)?;
        let existing = self.lookup(id, "todo_update", UPDATE_FAILED)?;

        let now_ms = self.clock.now_epoch_ms();
        validate_update(request, now_ms)?;

        let updated = mapper::from_update(&existing, request, now_ms);
        self.persist_update(updated, "todo_update", UPDATE_FAILED)
    }

    /// Inverts the completion flag of one todo.
    ///
    /// Toggling twice restores the original value; `updated_at` advances on
    /// both writes.
    pub fn toggle_todo(&self, id: &str) -> UseCaseResult<Todo> {
        validate_id(id)?;
        let existing = self.lookup(id, "todo_toggle", TOGGLE_FAILED)?;

        let toggled = Todo {
            completed: !existing.completed,
            updated_at: self.clock.now_epoch_ms(),
            ..existing
        };
        self.persist_update(toggled, "todo_toggle", TOGGLE_FAILED)
    }

    /// Deletes one todo.
    ///
    /// Deleting an unknown id is an observable not-found failure, not a
    /// silent no-op. The id is terminal afterwards; re-creating the same
    /// conceptual item yields a new id.
    pub fn delete_todo(&self, id: &str) -> UseCaseResult<()> {
        validate_id(id)?;
        self.lookup(id, "todo_delete", DELETE_FAILED)?;

        match self.repo.delete(id) {
            Ok(()) => {
                info!("event=todo_delete module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => Err(repo_failure("todo_delete", DELETE_FAILED, &err)),
        }
    }

    fn lookup(&self, id: &str, event: &str, failure_message: &'static str) -> UseCaseResult<Todo> {
        match self.repo.find_by_id(id) {
            Ok(Some(todo)) => Ok(todo),
            Ok(None) => {
                debug!("event={event} module=service status=not_found id={id}");
                Err(UseCaseError::NotFound)
            }
            Err(err) => Err(repo_failure(event, failure_message, &err)),
        }
    }

    fn persist_update(
        &self,
        todo: Todo,
        event: &str,
        failure_message: &'static str,
    ) -> UseCaseResult<Todo> {
        match self.repo.update(&todo) {
            Ok(stored) => {
                info!("event={event} module=service status=ok id={}", stored.id);
                Ok(stored)
            }
            Err(err) => Err(repo_failure(event, failure_message, &err)),
        }
    }
}

/// Converts a repository error at the boundary.
///
/// A `NotFound` surfacing from a mutation (lost race with a concurrent
/// delete) stays a not-found result; everything else becomes the generic
/// per-operation failure. The cause is logged here and goes no further.
fn repo_failure(event: &str, message: &'static str, err: &RepoError) -> UseCaseError {
    match err {
        RepoError::NotFound(id) => {
            debug!("event={event} module=service status=not_found id={id}");
            UseCaseError::NotFound
        }
        other => {
            error!("event={event} module=service status=error error_code=repo_failed error={other}");
            UseCaseError::Repository(message)
        }
    }
}

fn sort_todos(mut todos: Vec<Todo>) -> Vec<Todo> {
    let completed: Vec<Todo> = todos.iter().filter(|todo| todo.completed).cloned().collect();
    todos.retain(|todo| !todo.completed);

    // Stable sorts, so undated todos (which compare equal) keep adapter order.
    todos.sort_by(compare_due_dates);
    let mut ordered = todos;
    let mut completed = completed;
    completed.sort_by(compare_due_dates);
    ordered.extend(completed);
    ordered
}

fn compare_due_dates(a: &Todo, b: &Todo) -> Ordering {
    match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

#[cfg(test)]
mod tests {
    use super::sort_todos;
    use crate::model::todo::{Priority, Todo};

    fn todo(id: &str, due_date: Option<i64>, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            priority: Priority::Medium,
            due_date,
            completed,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|todo| todo.id.as_str()).collect()
    }

    #[test]
    fn incomplete_sorted_by_due_date_come_before_completed() {
        let sorted = sort_todos(vec![
            todo("d2-done", Some(2_000), true),
            todo("d3", Some(3_000), false),
            todo("d1", Some(1_000), false),
        ]);
        assert_eq!(ids(&sorted), ["d1", "d3", "d2-done"]);
    }

    #[test]
    fn undated_todos_sort_last_and_keep_relative_order() {
        let sorted = sort_todos(vec![
            todo("undated-a", None, false),
            todo("dated", Some(5_000), false),
            todo("undated-b", None, false),
        ]);
        assert_eq!(ids(&sorted), ["dated", "undated-a", "undated-b"]);
    }

    #[test]
    fn completed_partition_uses_the_same_sub_ordering() {
        let sorted = sort_todos(vec![
            todo("done-undated", None, true),
            todo("done-late", Some(9_000), true),
            todo("done-early", Some(1_000), true),
            todo("open-undated", None, false),
        ]);
        assert_eq!(
            ids(&sorted),
            ["open-undated", "done-early", "done-late", "done-undated"]
        );
    }
}
