//! Validation of task creation requests.
//!
//! Creation payloads are checked field by field before any domain logic runs.
//! Every violated field contributes exactly one [`FieldViolation`], reported
//! in the order title, description, due date.

use crate::task::domain::TaskFields;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Maximum title length, counted in characters.
pub const MAX_TITLE_CHARS: usize = 100;

const TITLE_MANDATORY: &str = "Title is mandatory";
const TITLE_TOO_LONG: &str = "Title must be less than 100 characters";
const DESCRIPTION_MANDATORY: &str = "Description is mandatory";
const DUE_DATE_MANDATORY: &str = "Due date is mandatory";

/// Unvalidated creation payload.
///
/// Missing text fields are represented as empty strings and a missing due
/// date as `None`; both are rejected by [`validate_create_request`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl CreateTaskRequest {
    /// Creates a request with title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
            completed: false,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_optional_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Creation payload that passed validation.
///
/// Only [`validate_create_request`] produces values of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCreateTask {
    fields: TaskFields,
}

impl ValidatedCreateTask {
    /// Returns the validated content fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Consumes the request, returning the validated content fields.
    #[must_use]
    pub fn into_fields(self) -> TaskFields {
        self.fields
    }
}

/// Request field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `dueDate` field.
    DueDate,
}

impl TaskField {
    /// Returns the field name as it appears in JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "dueDate",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending field.
    pub field: TaskField,
    /// Why the field was rejected.
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Rejected creation request, one violation per invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task request: {}", format_violations(&self.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns the violations in field order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the violation reported for `field`, if any.
    #[must_use]
    pub fn violation_for(&self, field: TaskField) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a creation request.
///
/// # Errors
///
/// Returns [`ValidationError`] when the title is blank or longer than
/// [`MAX_TITLE_CHARS`], the description is blank, or the due date is absent.
pub fn validate_create_request(
    request: CreateTaskRequest,
) -> Result<ValidatedCreateTask, ValidationError> {
    let mut violations = Vec::new();

    if let Some(message) = title_violation(&request.title) {
        violations.push(FieldViolation {
            field: TaskField::Title,
            message,
        });
    }
    if is_blank(&request.description) {
        violations.push(FieldViolation {
            field: TaskField::Description,
            message: DESCRIPTION_MANDATORY,
        });
    }

    let Some(due_date) = request.due_date else {
        violations.push(FieldViolation {
            field: TaskField::DueDate,
            message: DUE_DATE_MANDATORY,
        });
        return Err(ValidationError { violations });
    };

    if !violations.is_empty() {
        return Err(ValidationError { violations });
    }

    let fields = TaskFields::new(request.title, request.description, due_date)
        .with_completed(request.completed);
    Ok(ValidatedCreateTask { fields })
}

fn title_violation(title: &str) -> Option<&'static str> {
    if is_blank(title) {
        Some(TITLE_MANDATORY)
    } else if title.chars().count() > MAX_TITLE_CHARS {
        Some(TITLE_TOO_LONG)
    } else {
        None
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
