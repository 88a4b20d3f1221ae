//! Request and response bodies for the task HTTP surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::task::{
    domain::{Task, TaskFields},
    validation::CreateTaskRequest,
};

/// Task as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Identifier assigned on creation.
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Task title.
    #[schema(example = "Test Task")]
    pub title: String,
    /// Task description.
    #[schema(example = "Test Description")]
    pub description: String,
    /// Due date in `YYYY-MM-DD` form.
    #[schema(example = "2024-01-01")]
    pub due_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().map(i64::from),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            completed: task.completed(),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Body of `POST /tasks`.
///
/// Every field is optional at the wire level so that missing values are
/// reported as validation violations rather than parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title, at most 100 characters.
    #[schema(example = "Test Task")]
    pub title: Option<String>,
    /// Task description.
    #[schema(example = "Test Description")]
    pub description: Option<String>,
    /// Due date in `YYYY-MM-DD` form.
    #[schema(example = "2024-01-01")]
    pub due_date: Option<NaiveDate>,
    /// Completion flag, `false` when omitted or null.
    pub completed: Option<bool>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        Self::new(body.title.unwrap_or_default(), body.description.unwrap_or_default())
            .with_optional_due_date(body.due_date)
            .with_completed(body.completed.unwrap_or_default())
    }
}

/// Body of `PUT /tasks/{id}`: the full task shape.
///
/// Any `id` in the body is ignored; the path identifier wins. The payload
/// is not run through creation validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTaskBody {
    /// Ignored; present so clients can send back a task they fetched.
    #[serde(default)]
    pub id: Option<i64>,
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement due date in `YYYY-MM-DD` form.
    #[schema(example = "2024-01-02")]
    pub due_date: NaiveDate,
    /// Replacement completion flag, `false` when omitted or null.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<ReplaceTaskBody> for TaskFields {
    fn from(body: ReplaceTaskBody) -> Self {
        Self::new(body.title, body.description, body.due_date)
            .with_completed(body.completed.unwrap_or_default())
    }
}
