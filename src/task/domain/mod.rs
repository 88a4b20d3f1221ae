//! Domain model for task records.
//!
//! The task domain holds the single `Task` entity, its identifier, and the
//! content fields replaced wholesale on update. Infrastructure concerns stay
//! outside of this boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskFields};
