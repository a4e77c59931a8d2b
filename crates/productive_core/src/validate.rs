//! Field validation rules for todo payloads.
//!
//! # Responsibility
//! - Check create/update payloads before any mutation is attempted.
//! - Keep user-facing rule messages in one place.
//!
//! # Invariants
//! - Checks are pure and stateless; "now" is an explicit argument.
//! - Checks run in fixed order (title, description, due date) and stop at
//!   the first violation.
//! - Update rules apply only to fields present in the payload.

use crate::clock::parse_timestamp;
use crate::model::todo::{CreateTodoRequest, UpdateTodoRequest};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum accepted title length, in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum accepted description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// A single field-rule violation.
///
/// `Display` output is the user-facing message; use cases surface it
/// verbatim in failure results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Create payload without a usable title.
    TitleRequired,
    /// Update payload with a title that trims to nothing.
    TitleBlank,
    TitleTooLong,
    DescriptionTooLong,
    /// Due date string that does not parse to a timestamp.
    DueDateInvalid,
    /// Due date not strictly later than the validation instant.
    DueDateInPast,
    /// Blank id on update/toggle/delete calls.
    IdRequired,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::TitleRequired => "Title is required",
            Self::TitleBlank => "Title must be at least 1 character",
            Self::TitleTooLong => "Title must not exceed 200 characters",
            Self::DescriptionTooLong => "Description must not exceed 1000 characters",
            Self::DueDateInvalid => "Invalid due date format",
            Self::DueDateInPast => "Due date must be in the future",
            Self::IdRequired => "Todo ID is required",
        };
        f.write_str(message)
    }
}

impl Error for ValidationError {}

/// Validates a create payload against all field rules.
pub fn validate_create(request: &CreateTodoRequest, now_ms: i64) -> Result<(), ValidationError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }

    if let Some(description) = request.description.as_deref() {
        validate_description(description)?;
    }

    if let Some(due_date) = request.due_date.as_deref() {
        validate_due_date(due_date, now_ms)?;
    }

    Ok(())
}

/// Validates an update payload; absent fields are not re-validated.
pub fn validate_update(request: &UpdateTodoRequest, now_ms: i64) -> Result<(), ValidationError> {
    if let Some(title) = request.title.as_deref() {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::TitleBlank);
        }
        if trimmed.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong);
        }
    }

    if let Some(description) = request.description.as_deref() {
        validate_description(description)?;
    }

    if let Some(due_date) = request.due_date.as_deref() {
        validate_due_date(due_date, now_ms)?;
    }

    Ok(())
}

/// Rejects blank ids before any repository lookup happens.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::IdRequired);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

fn validate_due_date(due_date: &str, now_ms: i64) -> Result<(), ValidationError> {
    let due_ms = parse_timestamp(due_date).ok_or(ValidationError::DueDateInvalid)?;
    // Strictly later than the validation instant; equal-to-now is past.
    if due_ms <= now_ms {
        return Err(ValidationError::DueDateInPast);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_create, validate_id, validate_update, ValidationError};
    use crate::model::todo::{CreateTodoRequest, UpdateTodoRequest};

    const NOW_MS: i64 = 1_700_000_000_000;

    fn create_with_title(title: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            title: title.to_string(),
            ..CreateTodoRequest::default()
        }
    }

    #[test]
    fn create_accepts_exactly_200_chars_and_rejects_201() {
        let at_limit = create_with_title(&"a".repeat(200));
        assert_eq!(validate_create(&at_limit, NOW_MS), Ok(()));

        let over_limit = create_with_title(&"a".repeat(201));
        assert_eq!(
            validate_create(&over_limit, NOW_MS),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn create_rejects_empty_and_whitespace_title() {
        assert_eq!(
            validate_create(&create_with_title(""), NOW_MS),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_create(&create_with_title("   \t"), NOW_MS),
            Err(ValidationError::TitleRequired)
        );
    }

    #[test]
    fn create_title_is_measured_after_trimming() {
        let padded = create_with_title(&format!("  {}  ", "a".repeat(200)));
        assert_eq!(validate_create(&padded, NOW_MS), Ok(()));
    }

    #[test]
    fn create_rejects_long_description() {
        let request = CreateTodoRequest {
            title: "groceries".to_string(),
            description: Some("d".repeat(1001)),
            ..CreateTodoRequest::default()
        };
        assert_eq!(
            validate_create(&request, NOW_MS),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn create_due_date_must_be_strictly_in_the_future() {
        let past = CreateTodoRequest {
            title: "groceries".to_string(),
            due_date: Some("1970-01-01T00:00:01Z".to_string()),
            ..CreateTodoRequest::default()
        };
        assert_eq!(
            validate_create(&past, NOW_MS),
            Err(ValidationError::DueDateInPast)
        );

        let future = CreateTodoRequest {
            title: "groceries".to_string(),
            due_date: Some("2999-01-01T00:00:00Z".to_string()),
            ..CreateTodoRequest::default()
        };
        assert_eq!(validate_create(&future, NOW_MS), Ok(()));
    }

    #[test]
    fn create_rejects_unparseable_due_date() {
        let request = CreateTodoRequest {
            title: "groceries".to_string(),
            due_date: Some("next tuesday".to_string()),
            ..CreateTodoRequest::default()
        };
        assert_eq!(
            validate_create(&request, NOW_MS),
            Err(ValidationError::DueDateInvalid)
        );
    }

    #[test]
    fn checks_run_in_fixed_order_and_stop_at_first_violation() {
        // Both title and due date are invalid; the title rule must win.
        let request = CreateTodoRequest {
            title: "  ".to_string(),
            due_date: Some("garbage".to_string()),
            ..CreateTodoRequest::default()
        };
        assert_eq!(
            validate_create(&request, NOW_MS),
            Err(ValidationError::TitleRequired)
        );
    }

    #[test]
    fn update_skips_absent_fields() {
        assert_eq!(validate_update(&UpdateTodoRequest::default(), NOW_MS), Ok(()));
    }

    #[test]
    fn update_rejects_blank_title_with_its_own_message() {
        let request = UpdateTodoRequest {
            title: Some("   ".to_string()),
            ..UpdateTodoRequest::default()
        };
        let err = validate_update(&request, NOW_MS).unwrap_err();
        assert_eq!(err, ValidationError::TitleBlank);
        assert_eq!(err.to_string(), "Title must be at least 1 character");
    }

    #[test]
    fn update_applies_same_rules_to_present_fields() {
        let request = UpdateTodoRequest {
            title: Some("a".repeat(201)),
            ..UpdateTodoRequest::default()
        };
        assert_eq!(
            validate_update(&request, NOW_MS),
            Err(ValidationError::TitleTooLong)
        );

        let request = UpdateTodoRequest {
            due_date: Some("1970-01-01".to_string()),
            ..UpdateTodoRequest::default()
        };
        assert_eq!(
            validate_update(&request, NOW_MS),
            Err(ValidationError::DueDateInPast)
        );
    }

    #[test]
    fn blank_id_is_rejected() {
        assert_eq!(validate_id(""), Err(ValidationError::IdRequired));
        assert_eq!(validate_id("  "), Err(ValidationError::IdRequired));
        assert_eq!(validate_id("some-id"), Ok(()));
    }
}
