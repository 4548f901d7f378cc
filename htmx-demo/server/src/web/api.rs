use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::todo::api::v1::{TodoJson, TodosResponse};
use crate::todo::web::TodoState;

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    paths(crate::todo::api::v1::get_todos_handler),
    components(schemas(TodoJson, TodosResponse)),
    tags((name = "Todos", description = "Read access to the to-do list"))
)]
pub struct ApiDoc;

/// Creates the API routes for JSON API endpoints along with their Swagger UI.
pub fn create_api_router(todo_state: Arc<TodoState>) -> Router {
    let todos_router = crate::todo::api::v1::create_api_router(todo_state);
    Router::new()
        .nest("/api/v1", todos_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
