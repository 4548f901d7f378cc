use crate::todo::TodoItem;
use crate::todo::web::TodoState;
use axum::{Router, extract::State, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a to-do item for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TodoJson {
    /// Unique identifier of the item, always starting with a letter
    pub id: String,
    /// Title as entered by the user
    pub title: String,
    /// Whether the item has been completed
    pub done: bool,
}

impl From<TodoItem> for TodoJson {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            done: item.done(),
        }
    }
}

/// API response for listing all to-do items.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodosResponse {
    /// Items in creation order
    pub todos: Vec<TodoJson>,
    /// Total number of items
    pub count: usize,
}

/// Handler for GET /api/v1/todos - Returns all items in JSON format.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    responses(
        (status = 200, description = "Successfully retrieved to-do items", body = TodosResponse)
    ),
    tag = "Todos"
)]
pub async fn get_todos_handler(State(state): State<Arc<TodoState>>) -> Json<TodosResponse> {
    let todos: Vec<TodoJson> = state
        .repository
        .list()
        .into_iter()
        .map(TodoJson::from)
        .collect();
    let count = todos.len();

    Json(TodosResponse { todos, count })
}

/// Creates and returns the to-do API router.
pub fn create_api_router(state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/todos", get(get_todos_handler))
        .with_state(state)
}
