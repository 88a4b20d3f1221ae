//! Router setup for the task HTTP surface.

use axum::Router;
use axum::extract::OriginalUri;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::handlers::{create_task, delete_task, list_tasks, update_task};
use super::openapi::{OPENAPI_PATH, get_openapi_json, openapi_json};
use super::state::TaskApiState;

/// Creates the task router.
///
/// Task routes are nested under `base_path` (empty for `/tasks`, `/api` for
/// `/api/tasks`). The `OpenAPI` document is always served at
/// `/openapi.json` and lists the task paths under the same prefix.
pub fn task_router(state: TaskApiState, base_path: &str) -> Router {
    let spec = openapi_json(base_path).map_err(|err| err.to_string());
    let tasks = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
        .method_not_allowed_fallback(method_not_allowed);

    let router = if base_path.is_empty() {
        tasks
    } else {
        Router::new().nest(base_path, tasks)
    };

    router
        .route(OPENAPI_PATH, get(move || get_openapi_json(spec.clone())))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.0.path().to_owned(),
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
