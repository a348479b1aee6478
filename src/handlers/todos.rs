use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::middleware::extract::{ApiJson, ApiPath};
use crate::router::AppState;
use crate::types::todo::{TodoIn, TodoOut};
use crate::ApiError;

/// GET / -> service banner pointing at the docs.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Lightsail Todo API", "docs": "/docs" }))
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoOut>>, ApiError> {
    let rows = state.storage()?.list().await?;
    Ok(Json(rows.into_iter().map(TodoOut::from).collect()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TodoIn>,
) -> Result<(StatusCode, Json<TodoOut>), ApiError> {
    // Validate before touching the pool.
    let title = input.validated_title()?;
    let row = state.storage()?.create(title).await?;
    info!(id = row.id, "todo created");
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn toggle_done(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<TodoOut>, ApiError> {
    state
        .storage()?
        .toggle_done(id)
        .await?
        .map(|row| Json(TodoOut::from(row)))
        .ok_or(ApiError::NotFound(id))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    if state.storage()?.delete(id).await? {
        info!(id, "todo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}
