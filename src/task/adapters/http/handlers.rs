//! Task endpoint handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::dto::{CreateTaskBody, ReplaceTaskBody, TaskResponse};
use super::error::{ApiError, ApiErrorResponse, ApiResult};
use super::state::TaskApiState;
use crate::task::{domain::TaskId, validation::validate_create_request};

/// `GET /tasks`: lists every task.
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All stored tasks", body = [TaskResponse]),
        (status = 500, description = "Persistence failure", body = ApiErrorResponse),
    )
)]
pub async fn list_tasks(State(state): State<TaskApiState>) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = state.service.list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `POST /tasks`: validates the payload and creates a task.
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = CreateTaskBody,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid input", body = ApiErrorResponse),
        (status = 500, description = "Persistence failure", body = ApiErrorResponse),
    )
)]
pub async fn create_task(
    State(state): State<TaskApiState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(body) = payload.map_err(|rejection| invalid_json(&rejection))?;
    let validated = validate_create_request(body.into())?;
    let task = state.service.create(validated).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// `PUT /tasks/{id}`: replaces every content field of a task.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = i64, Path, description = "Identifier of the task to replace"),
    ),
    request_body = ReplaceTaskBody,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Malformed identifier or body", body = ApiErrorResponse),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Persistence failure", body = ApiErrorResponse),
    )
)]
pub async fn update_task(
    State(state): State<TaskApiState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ReplaceTaskBody>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload.map_err(|rejection| invalid_json(&rejection))?;
    let task = state.service.update(id, body.into()).await?;
    Ok(Json(task.into()))
}

/// `DELETE /tasks/{id}`: removes a task.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = i64, Path, description = "Identifier of the task to delete"),
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Malformed identifier", body = ApiErrorResponse),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Persistence failure", body = ApiErrorResponse),
    )
)]
pub async fn delete_task(
    State(state): State<TaskApiState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_task_id(&raw_id)?;
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse::<TaskId>()
        .map_err(|err| ApiError::bad_request(err.to_string()))
}

fn invalid_json(rejection: &JsonRejection) -> ApiError {
    ApiError::bad_request(format!("invalid JSON body: {}", rejection.body_text()))
}
