pub mod api;
use askama::Template;
use axum::Router;
use axum::http::{HeaderName, StatusCode};
use axum::response::Html;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::todo::InMemoryTodoRepository;
use crate::todo::web::{TodoState, create_todo_router};

/// Custom error type for web handler operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Represents an error during template rendering.
    /// The specific `askama::Error` is captured as the source of this error.
    #[error("Template rendering failed")]
    Template(#[from] askama::Error),
}

impl axum::response::IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{}: {:?}", self, self);
        let user_facing_error_message =
            "An unexpected error occurred while processing your request. Please try again later.";
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                "<h1>Internal Server Error</h1><p>{}</p>",
                user_facing_error_message
            )),
        )
            .into_response()
    }
}

/// Builds the complete application router around the given to-do state.
pub fn create_app(todo_state: Arc<TodoState>) -> Router {
    let public_routes = Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .route("/", axum::routing::get(welcome_handler));

    Router::new()
        .merge(public_routes)
        .merge(create_todo_router(todo_state.clone()))
        .merge(api::create_api_router(todo_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().expose_headers([
                    HeaderName::from_static("hx-retarget"),
                    HeaderName::from_static("hx-reswap"),
                ])),
        )
}

#[tracing::instrument]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let todo_state = Arc::new(TodoState::new(Arc::new(InMemoryTodoRepository::new())));
    let app = create_app(todo_state);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}

#[tracing::instrument]
pub async fn welcome_handler() -> Result<Html<String>, WebError> {
    let template = IndexTemplate::new("htmx to-do list");
    template.render().map(Html).map_err(WebError::from)
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn can_handle_template_error_with_internal_server_error() {
        let custom_error_message = "Simulated template rendering failure".to_string();
        let template_error = askama::Error::Custom(custom_error_message.into());

        let web_error = WebError::Template(template_error);
        let response = axum::response::IntoResponse::into_response(web_error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_text = std::str::from_utf8(&body).unwrap();

        assert_eq!(
            body_text,
            "<h1>Internal Server Error</h1><p>An unexpected error occurred while processing your request. Please try again later.</p>"
        );
    }

    #[tokio::test]
    async fn can_render_index_page_with_todo_list_container() {
        let Html(page) = welcome_handler().await.unwrap();

        assert!(page.contains(r#"<ul id="todo-list" hx-get="/todo" hx-trigger="load""#));
        assert!(page.contains(r#"name="newTodo""#));
        assert!(page.contains("<title>htmx to-do list</title>"));
    }
}
