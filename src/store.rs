//! Storage abstraction and the in-memory implementation.
//!
//! # Design
//! The handlers depend on the `TodoStore` trait, never on a concrete
//! database client, so tests run against `InMemoryStore` without a network
//! or process dependency. The store owns id assignment: ids start at 1,
//! grow monotonically, and are never reused after deletion.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::types::Todo;

/// Not-found message reported when updating an absent id.
pub const UPDATED_ID_NOT_EXIST_ERR_MSG: &str = "Updated todo id is not exist!";
/// Not-found message reported when deleting an absent id.
pub const DELETED_ID_NOT_EXIST_ERR_MSG: &str = "Deleted todo id is not exist!";

/// Persistence operations the handlers dispatch to.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Returns all todos in the store's native order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Inserts a new todo; the store assigns the id and creation timestamp.
    async fn insert(&self, content: &str) -> Result<(), StoreError>;

    /// Replaces the content of the todo with the given id.
    /// Fails with `NotFound` when the id does not exist.
    async fn update_by_id(&self, id: i64, content: &str) -> Result<(), StoreError>;

    /// Removes the todo with the given id.
    /// Fails with `NotFound` when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

struct Inner {
    todos: Vec<Todo>,
    next_id: i64,
}

/// Process-local `TodoStore` backed by a `Vec` behind an async `RwLock`.
///
/// Used by tests and as the fallback when no database is configured.
/// Insertion order doubles as the list order, which matches ascending id
/// order because ids only ever grow.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.clone())
    }

    async fn insert(&self, content: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.todos.push(Todo {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn update_by_id(&self, id: i64, content: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        match inner.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.content = content.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(UPDATED_ID_NOT_EXIST_ERR_MSG.to_string())),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let len_before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != id);
        if inner.todos.len() == len_before {
            return Err(StoreError::NotFound(DELETED_ID_NOT_EXIST_ERR_MSG.to_string()));
        }
        Ok(())
    }
}
