//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence capability set consumed by the use-case layer.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - `find_all` guarantees no particular order; list ordering is the
//!   use-case layer's job.

use crate::db::DbError;
use crate::model::todo::{Priority, Todo, TodoId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    priority,
    due_date,
    completed,
    created_at,
    updated_at
FROM todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for todo persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TodoId),
    InvalidData(String),
    Storage(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
            Self::Storage(message) => write!(f, "storage failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::Storage(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence capability set required by the use-case layer.
///
/// Any conforming adapter is interchangeable. Single create/update/delete
/// calls are observed by later reads as fully applied or not applied at all;
/// cross-operation coordination for races on one id is the adapter's
/// responsibility, not the contract's.
pub trait TodoRepository {
    fn find_all(&self) -> RepoResult<Vec<Todo>>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<Todo>>;
    fn create(&self, todo: &Todo) -> RepoResult<Todo>;
    fn update(&self, todo: &Todo) -> RepoResult<Todo>;
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Wraps a connection opened through `db::open_db` /
    /// `db::open_db_in_memory` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Todo>> {
        // Insertion-ordered for determinism only; callers re-sort.
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn create(&self, todo: &Todo) -> RepoResult<Todo> {
        self.conn.execute(
            "INSERT INTO todos (
                id,
                title,
                description,
                priority,
                due_date,
                completed,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                todo.id.as_str(),
                todo.title.as_str(),
                todo.description.as_deref(),
                todo.priority.as_str(),
                todo.due_date,
                bool_to_int(todo.completed),
                todo.created_at,
                todo.updated_at,
            ],
        )?;

        Ok(todo.clone())
    }

    fn update(&self, todo: &Todo) -> RepoResult<Todo> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET
                title = ?1,
                description = ?2,
                priority = ?3,
                due_date = ?4,
                completed = ?5,
                updated_at = ?6
             WHERE id = ?7;",
            params![
                todo.title.as_str(),
                todo.description.as_deref(),
                todo.priority.as_str(),
                todo.due_date,
                bool_to_int(todo.completed),
                todo.updated_at,
                todo.id.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(todo.id.clone()));
        }

        Ok(todo.clone())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let priority_text: String = row.get("priority")?;
    let priority = Priority::parse(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority value `{priority_text}` in todos.priority"
        ))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        priority,
        due_date: row.get("due_date")?,
        completed,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
