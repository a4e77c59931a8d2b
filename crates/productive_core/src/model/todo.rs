//! Todo entity and request payloads.
//!
//! # Responsibility
//! - Define the canonical todo record persisted by repository adapters.
//! - Define create/update payload shapes with partial-update semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `title` is never blank after trimming (enforced by `validate`).
//! - `updated_at >= created_at` for every snapshot.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};

/// Stable identifier for one todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// create use case assigns UUID v4 text; the contract only requires
/// uniqueness within a repository's lifetime.
pub type TodoId = String;

/// Urgency level attached to every todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Stable lowercase text used for storage and wire formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses the stable text form. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Canonical todo record.
///
/// Timestamps are Unix epoch milliseconds (UTC). A missing `due_date` means
/// the todo is undated; undated todos sort after dated ones when listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable ID assigned once by the create use case.
    pub id: TodoId,
    /// Non-blank, trimmed, at most 200 characters.
    pub title: String,
    /// Optional, trimmed, at most 1000 characters.
    pub description: Option<String>,
    pub priority: Priority,
    /// Epoch milliseconds. Validated to be in the future at write time.
    pub due_date: Option<i64>,
    pub completed: bool,
    /// Epoch milliseconds. Set once at creation, never mutated.
    pub created_at: i64,
    /// Epoch milliseconds. Refreshed on every mutation.
    pub updated_at: i64,
}

/// Payload for creating one todo.
///
/// `due_date` is an RFC 3339 timestamp (or `YYYY-MM-DD`); it is parsed and
/// range-checked by `validate::validate_create` before mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
}

/// Partial payload for updating one todo.
///
/// Absent fields leave the stored value untouched. There is no way to clear
/// an existing due date through this payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::Priority;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_text_roundtrip_is_stable() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::parse("urgent"), None);
    }
}
