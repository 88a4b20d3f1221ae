//! Shared state for task handlers.

use std::sync::Arc;

use crate::task::{ports::TaskRepository, services::TaskService};

/// State injected into every task handler.
#[derive(Clone)]
pub struct TaskApiState {
    /// Service executing task operations.
    pub service: TaskService<dyn TaskRepository>,
}

impl TaskApiState {
    /// Creates handler state around an existing service.
    #[must_use]
    pub const fn new(service: TaskService<dyn TaskRepository>) -> Self {
        Self { service }
    }

    /// Creates handler state for a repository, building the service.
    #[must_use]
    pub fn from_repository(repository: Arc<dyn TaskRepository>) -> Self {
        Self::new(TaskService::new(repository))
    }
}
