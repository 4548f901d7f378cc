use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::todo::render::{render_collection, render_item};
use crate::todo::{TodoRepository, TodoServiceError};

#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    #[serde(rename = "newTodo", default)]
    new_todo: String,
}

/// Shared state for to-do handlers.
#[derive(Clone)]
pub struct TodoState {
    pub repository: Arc<dyn TodoRepository + Send + Sync>,
}

impl TodoState {
    pub fn new(repository: Arc<dyn TodoRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

/// Custom error type for to-do handler operations.
#[derive(Debug, thiserror::Error)]
enum TodoError {
    /// Represents an error during template rendering.
    #[error("Template rendering failed")]
    Template(#[from] askama::Error),
    /// Represents a to-do service error.
    #[error("Todo service error")]
    Service(#[from] TodoServiceError),
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        match self {
            TodoError::Service(TodoServiceError::NotFound(id)) => {
                tracing::warn!("Todo {} not found", id);
                StatusCode::BAD_REQUEST.into_response()
            }
            TodoError::Template(err) => {
                tracing::error!("Failed to render todo fragment: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(
                        "<h1>Error</h1><p>An unexpected error occurred while processing your request. Please try again later.</p>",
                    ),
                )
                    .into_response()
            }
        }
    }
}

/// Handler for GET /todo that returns every item as list entries.
#[tracing::instrument(skip(state))]
async fn list_todos_handler(
    State(state): State<Arc<TodoState>>,
) -> Result<Html<String>, TodoError> {
    let items = state.repository.list();
    Ok(Html(render_collection(&items)?))
}

/// Handler for POST /todo that appends a new item and returns its fragment.
#[tracing::instrument(skip(state))]
async fn create_todo_handler(
    State(state): State<Arc<TodoState>>,
    Form(form): Form<CreateTodoForm>,
) -> Result<Html<String>, TodoError> {
    let item = state.repository.create(form.new_todo);
    Ok(Html(render_item(&item)?))
}

/// Handler for PUT /todo/{id} that flips the item between active and completed.
#[tracing::instrument(skip(state))]
async fn toggle_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, TodoError> {
    let item = state.repository.toggle(&id)?;
    Ok(Html(render_item(&item)?))
}

/// Handler for DELETE /todo/{id} that returns the remaining items.
#[tracing::instrument(skip(state))]
async fn delete_todo_handler(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, TodoError> {
    let items = state.repository.delete(&id);
    Ok(Html(render_collection(&items)?))
}

/// Creates and returns the to-do router with all fragment routes.
pub fn create_todo_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/todo", get(list_todos_handler).post(create_todo_handler))
        .route(
            "/todo/{id}",
            put(toggle_todo_handler).delete(delete_todo_handler),
        )
        .with_state(state)
}
