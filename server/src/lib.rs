//! HTTP front end for the in-memory todo store.
//!
//! Routes translate verbs and paths into `TodoStore` calls. The store is built
//! once by the caller and shared with every handler through router state.

pub mod config;
pub mod error;
pub mod extract;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use todo_core::{Todo, TodoId, TodoInput, TodoStore};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::debug;

pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, ErrorBody};
pub use extract::JsonBody;

pub type SharedStore = Arc<TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        // Titles and descriptions have no length limit.
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Path ids that are not integers behave like ids nobody holds.
fn parse_id(raw: &str) -> Result<TodoId, AppError> {
    raw.parse().map_err(|_| AppError::UnknownId(raw.to_string()))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list_all())
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id)?))
}

async fn create_todo(
    State(store): State<SharedStore>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = store.insert(input)?;
    debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let todo = store.update(id, input)?;
    debug!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    store.delete(id)?;
    debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
