//! Payload-to-entity snapshot builders.
//!
//! # Responsibility
//! - Build a complete entity from a validated create payload.
//! - Merge a validated partial update payload over an existing snapshot.
//!
//! # Invariants
//! - Both builders are pure and never mutate their inputs.
//! - `created_at` is written once by `from_create` and copied unchanged by
//!   `from_update`.
//! - `updated_at` is always the supplied "now".

use crate::clock::parse_timestamp;
use crate::model::todo::{CreateTodoRequest, Todo, TodoId, UpdateTodoRequest};

/// Builds a complete entity from a create payload.
///
/// Trims title and description, defaults priority to medium, starts as
/// incomplete, and stamps both audit fields with `now_ms`. Callers must have
/// run `validate::validate_create` first; an unparseable due date (which
/// validation rejects) degrades to "no due date" here rather than panicking.
pub fn from_create(request: &CreateTodoRequest, id: TodoId, now_ms: i64) -> Todo {
    Todo {
        id,
        title: request.title.trim().to_string(),
        description: request
            .description
            .as_deref()
            .map(|description| description.trim().to_string()),
        priority: request.priority.unwrap_or_default(),
        due_date: request.due_date.as_deref().and_then(parse_timestamp),
        completed: false,
        created_at: now_ms,
        updated_at: now_ms,
    }
}

/// Merges an update payload over an existing snapshot.
///
/// Only fields present in the payload are overwritten (strings trimmed);
/// everything else is copied from `existing`. `updated_at` is refreshed
/// unconditionally.
pub fn from_update(existing: &Todo, request: &UpdateTodoRequest, now_ms: i64) -> Todo {
    Todo {
        id: existing.id.clone(),
        title: match request.title.as_deref() {
            Some(title) => title.trim().to_string(),
            None => existing.title.clone(),
        },
        description: match request.description.as_deref() {
            Some(description) => Some(description.trim().to_string()),
            None => existing.description.clone(),
        },
        priority: request.priority.unwrap_or(existing.priority),
        due_date: match request.due_date.as_deref() {
            Some(due_date) => parse_timestamp(due_date),
            None => existing.due_date,
        },
        completed: request.completed.unwrap_or(existing.completed),
        created_at: existing.created_at,
        updated_at: now_ms,
    }
}
