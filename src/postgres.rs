//! Postgres-backed `TodoStore` built on a sqlx connection pool.
//!
//! # Design
//! Update and delete detect a missing id through `rows_affected() == 0` on
//! the statement result rather than an existence pre-check, so there is no
//! check-then-write race against concurrent deletes. Id assignment and the
//! creation timestamp both live in the schema (`BIGSERIAL` / `DEFAULT
//! now()`), which keeps ids monotonic and unrecycled across deletions.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::store::{TodoStore, DELETED_ID_NOT_EXIST_ERR_MSG, UPDATED_ID_NOT_EXIST_ERR_MSG};
use crate::types::Todo;

/// `TodoStore` persisted in Postgres.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects a small pool to the database at `url`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
        Ok(Self { pool })
    }

    /// Creates the `todos` table when it does not exist yet.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id BIGSERIAL PRIMARY KEY,
                content TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, content, created_at FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    async fn insert(&self, content: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO todos (content) VALUES ($1)")
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_id(&self, id: i64, content: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE todos SET content = $1 WHERE id = $2")
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(UPDATED_ID_NOT_EXIST_ERR_MSG.to_string()));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(DELETED_ID_NOT_EXIST_ERR_MSG.to_string()));
        }
        Ok(())
    }
}
