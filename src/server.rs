//! Request handlers: validation, dispatch to the store, and the mapping
//! from store outcomes to HTTP status codes.
//!
//! # Design
//! Handlers take the raw body as `String` and deserialize with serde_json
//! themselves instead of using the `Json` extractor, because the contract
//! answers malformed JSON with 500 while axum's extractor rejection would
//! answer 400/415/422. Every error path writes the error's message as the
//! whole body (newline-terminated) and logs it; every success path writes
//! exactly one body. Handlers hold no state of their own — everything lives
//! behind the shared `TodoStore`, so concurrent requests are independent.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, put};
use axum::Router;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::{NewTodo, UpdateTodo};

/// 400 body for an empty or missing content field.
pub const INVALID_CONTENT_ERR_MSG: &str = "Invalid content!";
/// 400 body for a non-positive or missing id.
pub const INVALID_ID_ERR_MSG: &str = "Invalid id!";

/// Shared handle the handlers dispatch through.
pub type SharedStore = Arc<dyn TodoStore>;

/// Builds the router over the given store.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/update", put(update_todo))
        .route("/delete/{id}", delete(delete_todo))
        .with_state(store)
}

async fn list_todos(State(store): State<SharedStore>) -> Response {
    // An empty store serializes to `[]`, never null.
    match store.list().await {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => store_failure(err),
    }
}

async fn create_todo(State(store): State<SharedStore>, body: String) -> Response {
    let new_todo: NewTodo = match serde_json::from_str(&body) {
        Ok(new_todo) => new_todo,
        Err(err) => return log_and_respond(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };

    if new_todo.content.is_empty() {
        return log_and_respond(StatusCode::BAD_REQUEST, INVALID_CONTENT_ERR_MSG);
    }

    match store.insert(&new_todo.content).await {
        Ok(()) => execute_success("add new todo"),
        Err(err) => store_failure(err),
    }
}

async fn update_todo(State(store): State<SharedStore>, body: String) -> Response {
    let update: UpdateTodo = match serde_json::from_str(&body) {
        Ok(update) => update,
        Err(err) => return log_and_respond(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };

    // Id validity wins the tie-break when both fields are invalid.
    if update.id <= 0 {
        return log_and_respond(StatusCode::BAD_REQUEST, INVALID_ID_ERR_MSG);
    }
    if update.content.is_empty() {
        return log_and_respond(StatusCode::BAD_REQUEST, INVALID_CONTENT_ERR_MSG);
    }

    match store.update_by_id(update.id, &update.content).await {
        Ok(()) => execute_success("update todo"),
        Err(err) => store_failure(err),
    }
}

async fn delete_todo(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    // A non-numeric path segment gets the same internal-error framing as a
    // body that fails to deserialize.
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(err) => {
            return log_and_respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("problem parsing delete id, {err}"),
            )
        }
    };

    if id <= 0 {
        return log_and_respond(StatusCode::BAD_REQUEST, INVALID_ID_ERR_MSG);
    }

    match store.delete_by_id(id).await {
        Ok(()) => execute_success("delete todo"),
        Err(err) => store_failure(err),
    }
}

/// Maps a store failure onto a status by its tag: `NotFound` is the
/// client's mistake (400), anything else is ours (500).
fn store_failure(err: StoreError) -> Response {
    let status = match err {
        StoreError::NotFound(_) => StatusCode::BAD_REQUEST,
        StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    log_and_respond(status, &err.to_string())
}

fn log_and_respond(status: StatusCode, msg: &str) -> Response {
    tracing::error!("{msg}");
    (status, format!("{msg}\n")).into_response()
}

fn execute_success(action: &str) -> Response {
    (StatusCode::OK, format!("Successfully {action}!!!\n")).into_response()
}
