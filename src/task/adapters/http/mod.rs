//! HTTP transport for the task service.
//!
//! Handlers translate requests into [`TaskService`](crate::task::services::TaskService)
//! calls and map outcomes onto status codes:
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /tasks` | 200, JSON array | 500 |
//! | `POST /tasks` | 201, created task | 400 with per-field violations |
//! | `PUT /tasks/{id}` | 200, updated task | 404 plain text `Task not found` |
//! | `DELETE /tasks/{id}` | 204 | 404 plain text |
//!
//! Malformed identifiers and bodies are rejected with 400 before the service
//! is called.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ViolationBody};
pub use openapi::{TaskApiDoc, openapi_document, openapi_json};
pub use router::task_router;
pub use state::TaskApiState;
