//! `OpenAPI` document for the task HTTP surface.

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use utoipa::OpenApi;

use super::error::{ApiError, ApiErrorResponse};

/// `OpenAPI` documentation for the task API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskMaster API",
        version = "1.0",
        description = "API for managing tasks",
        contact(
            name = "Mateus",
            email = "sec.mateuslgomes@gmail.com",
            url = "https://github.com/mlgsec"
        )
    ),
    paths(
        crate::task::adapters::http::handlers::list_tasks,
        crate::task::adapters::http::handlers::create_task,
        crate::task::adapters::http::handlers::update_task,
        crate::task::adapters::http::handlers::delete_task,
        get_openapi_json,
    ),
    components(
        schemas(
            crate::task::adapters::http::dto::TaskResponse,
            crate::task::adapters::http::dto::CreateTaskBody,
            crate::task::adapters::http::dto::ReplaceTaskBody,
            crate::task::adapters::http::error::ApiErrorResponse,
            crate::task::adapters::http::error::ApiErrorDetail,
            crate::task::adapters::http::error::ViolationBody,
        )
    ),
    tags(
        (name = "Tasks", description = "Task management operations"),
        (name = "OpenAPI", description = "OpenAPI specification endpoint"),
    ),
)]
pub struct TaskApiDoc;

/// Route serving the document; never prefixed by the base path.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Builds the document with every task path mounted under `base_path`.
#[must_use]
pub fn openapi_document(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = TaskApiDoc::openapi();
    if !base_path.is_empty() {
        doc.paths.paths = std::mem::take(&mut doc.paths.paths)
            .into_iter()
            .map(|(path, item)| {
                if path == OPENAPI_PATH {
                    (path, item)
                } else {
                    (format!("{base_path}{path}"), item)
                }
            })
            .collect();
    }
    doc
}

/// Returns the document for `base_path` serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn openapi_json(base_path: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi_document(base_path))
}

/// `GET /openapi.json`: serves the document rendered when the router was
/// built, or the serialization failure captured then.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "OpenAPI",
    responses(
        (
            status = 200,
            description = "OpenAPI specification",
            body = String,
            content_type = "application/json"
        ),
        (status = 500, description = "Internal error", body = ApiErrorResponse),
    )
)]
pub async fn get_openapi_json(spec: Result<String, String>) -> Response {
    match spec {
        Ok(spec) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(err) => ApiError::Internal {
            message: format!("failed to serialize OpenAPI spec: {err}"),
        }
        .into_response(),
    }
}
