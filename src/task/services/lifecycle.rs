//! Service layer for task creation, listing, replacement, and removal.

use crate::task::{
    domain::{Task, TaskFields, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
    validation::ValidatedCreateTask,
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The referenced task does not exist.
    #[error("{message}")]
    NotFound {
        /// Identifier that was looked up.
        id: TaskId,
        /// Human-readable message reported to callers.
        message: String,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    fn update_target_missing(id: TaskId) -> Self {
        Self::NotFound {
            id,
            message: "Task not found".to_owned(),
        }
    }

    fn delete_target_missing(id: TaskId) -> Self {
        Self::NotFound {
            id,
            message: format!("Task with ID {id} not found"),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns the existence checks and full-record replacement rules; storage is
/// delegated to the repository supplied at construction.
pub struct TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored task in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates and stores a task from a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the repository rejects
    /// persistence.
    pub async fn create(&self, request: ValidatedCreateTask) -> TaskServiceResult<Task> {
        let task = Task::new(request.into_fields());
        let saved = self.repository.save(&task).await?;
        tracing::info!(task_id = ?saved.id(), "created task");
        Ok(saved)
    }

    /// Replaces all content fields of an existing task.
    ///
    /// The stored identifier is kept; title, description, due date, and the
    /// completion flag are overwritten with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the identifier
    /// and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, fields: TaskFields) -> TaskServiceResult<Task> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            tracing::debug!(task_id = %id, "update target not found");
            return Err(TaskServiceError::update_target_missing(id));
        };

        task.replace_fields(fields);
        let saved = self.repository.save(&task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(_) => TaskServiceError::update_target_missing(id),
            other @ TaskRepositoryError::Persistence(_) => other.into(),
        })?;
        tracing::info!(task_id = %id, "updated task");
        Ok(saved)
    }

    /// Removes an existing task.
    ///
    /// Nothing is deleted when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the identifier
    /// and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            tracing::debug!(task_id = %id, "delete target not found");
            return Err(TaskServiceError::delete_target_missing(id));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(_) => TaskServiceError::delete_target_missing(id),
                other @ TaskRepositoryError::Persistence(_) => other.into(),
            })?;
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }
}
