//! Task entity and its replaceable content fields.

use super::TaskId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four mutable content fields of a task.
///
/// Updates replace all of them at once; there is no field-level patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    /// Short task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl TaskFields {
    /// Creates content fields with `completed` set to `false`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            completed: false,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Task entity.
///
/// A task with an identifier has been persisted. Identity is assigned once by
/// the repository and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: Option<TaskId>,
    #[serde(flatten)]
    fields: TaskFields,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted content fields.
    pub fields: TaskFields,
}

impl Task {
    /// Creates a new, not yet persisted task.
    #[must_use]
    pub const fn new(fields: TaskFields) -> Self {
        Self { id: None, fields }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            fields: data.fields,
        }
    }

    /// Returns the task identifier, if the task has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns `true` once the repository has assigned an identifier.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.fields.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.fields.completed
    }

    /// Returns all content fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Overwrites every content field while keeping the identifier.
    pub fn replace_fields(&mut self, fields: TaskFields) {
        self.fields = fields;
    }
}
