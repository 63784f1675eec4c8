use crate::state;
use crate::templates;
use crate::types::task::{Task, TaskDraft, TaskPatch};

use axum::Json;
use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::StatusCode;

use super::ErrorResponse;

pub(crate) async fn dashboard(
    State(state): State<state::AppState>,
) -> templates::DashboardTemplate {
    templates::DashboardTemplate {
        app_name: state.config.app_name,
    }
}

pub(crate) async fn task_list(State(state): State<state::AppState>) -> Json<Vec<Task>> {
    let tasks = state.tasks.lock().expect("task store lock").list();
    Json(tasks)
}

pub(crate) async fn task_create(
    State(state): State<state::AppState>,
    Json(draft): Json<TaskDraft>,
) -> (StatusCode, Json<Task>) {
    let task = state.tasks.lock().expect("task store lock").create(draft);
    (StatusCode::CREATED, Json(task))
}

pub(crate) async fn task_update(
    State(state): State<state::AppState>,
    AxumPath(id): AxumPath<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let updated = state
        .tasks
        .lock()
        .expect("task store lock")
        .update(id, patch);
    match updated {
        Some(task) => Ok(Json(task)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found",
            }),
        )),
    }
}

pub(crate) async fn task_delete(
    State(state): State<state::AppState>,
    AxumPath(id): AxumPath<u64>,
) -> StatusCode {
    state.tasks.lock().expect("task store lock").delete(id);
    StatusCode::NO_CONTENT
}
