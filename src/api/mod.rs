use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{TodoDto, TodoPayload};
use crate::state::AppState;

const HOME_PAGE: &str = include_str!("../../static/home.html");

#[derive(Debug, Serialize)]
struct TodoListResponse {
    data: Vec<TodoDto>,
}

#[derive(Debug, Serialize)]
struct TodoCreatedResponse {
    message: String,
    todo_id: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(todo_routes())
        .with_state(state)
}

fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todo/", get(list_todos).post(create_todo))
        .route("/todo/{id}", put(update_todo).delete(delete_todo))
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, AppError> {
    let records = state.store.fetch_all().await?;
    let data = records.iter().map(TodoDto::from).collect();
    Ok(Json(TodoListResponse { data }))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoCreatedResponse>), AppError> {
    let Json(payload) = payload
        .map_err(|e| AppError::Validation(format!("invalid request body: {}", e)))?;

    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }

    // New todos always start out not completed, whatever the client sent.
    let record = state.store.insert(title, false).await?;

    Ok((
        StatusCode::CREATED,
        Json(TodoCreatedResponse {
            message: "todo created successfully".to_string(),
            todo_id: record.id.to_string(),
        }),
    ))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload
        .map_err(|e| AppError::Validation(format!("invalid request body: {}", e)))?;

    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }

    let affected = state.store.update(id, title, payload.completed).await?;
    if affected == 0 {
        debug!("update matched no todo for id {}", id);
    }

    Ok(Json(MessageResponse {
        message: "todo updated successfully".to_string(),
    }))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;

    let affected = state.store.delete(id).await?;
    if affected == 0 {
        debug!("delete matched no todo for id {}", id);
    }

    Ok(Json(MessageResponse {
        message: "todo deleted successfully".to_string(),
    }))
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("id must not be empty".to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("id is invalid: {:?}", raw)))
}
