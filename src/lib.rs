//! HTTP CRUD service over todo items.
//!
//! # Overview
//! Four operations — list, create, update, delete — behind an axum router.
//! The handlers validate the request, dispatch to a `TodoStore`, and map
//! the outcome to a status code and a plain-text or JSON body.
//!
//! # Design
//! - Handlers are stateless; all state lives behind `Arc<dyn TodoStore>`.
//! - Store failures are tagged (`NotFound` vs `Backend`) so the status
//!   mapping never inspects error text.
//! - `InMemoryStore` backs the tests and the no-database fallback;
//!   `PgStore` is the store of record in production.

pub mod error;
pub mod postgres;
pub mod server;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use server::{app, SharedStore};
pub use store::{InMemoryStore, TodoStore};
pub use types::{NewTodo, Todo, UpdateTodo};
