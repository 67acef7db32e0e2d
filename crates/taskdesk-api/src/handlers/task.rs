use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use taskdesk_core::{Error, Task};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    responses((status = 200, description = "All tasks in the store", body = [Task]))
)]
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.store.list().await)
}

/// List completed tasks
#[utoipa::path(
    get,
    path = "/tasks/completed",
    responses((status = 200, description = "Tasks with the completion flag set", body = [Task]))
)]
pub async fn list_completed_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.store.list_completed().await)
}

/// Get a task by id
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = Task),
        (status = 404, description = "No task with that id", body = ErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.get(id).await {
        Some(task) => Ok(Json(task)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: Error::TaskNotFound(id).to_string(),
            }),
        )),
    }
}

/// Create a task
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = Task,
    responses((status = 201, description = "Created, with a Location header", body = Task))
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Task>,
) -> impl IntoResponse {
    let task = state.store.create(payload).await;
    let location = format!("/tasks/{}", task.id);

    (StatusCode::CREATED, [(header::LOCATION, location)], Json(task))
}

/// Replace a task's name and completion flag
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = i32, Path, description = "Task id")),
    request_body = Task,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No task with that id", body = ErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<Task>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.store.update(id, payload).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e @ Error::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "The removed task", body = Task),
        (status = 404, description = "No task with that id", body = ErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.delete(id).await {
        Ok(task) => Ok(Json(task)),
        Err(e @ Error::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
