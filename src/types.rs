//! Domain DTOs for the todo API.
//!
//! # Design
//! Request payloads use `#[serde(default)]` on every field so a missing
//! field deserializes to its zero value instead of failing the decode.
//! Validation in the handlers then rejects the zero values (empty content,
//! id 0) with a 400, while only shape-level JSON errors surface as 500.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as stored and returned by the API.
///
/// `id` is assigned by the store at insert time, is strictly positive and
/// monotonically increasing, and is never reused after deletion.
/// `created_at` is assigned at insert time and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub content: String,
}

/// Request payload for updating an existing todo's content. The id and
/// creation timestamp are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn todo_serializes_with_camel_case_timestamp() {
        let todo = Todo {
            id: 1,
            content: "Test".to_string(),
            created_at: Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["content"], "Test");
        assert_eq!(json["createdAt"], "2009-11-10T23:00:00Z");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            content: "Roundtrip".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn new_todo_missing_content_defaults_to_empty() {
        let input: NewTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.content.is_empty());
    }

    #[test]
    fn new_todo_ignores_misspelled_field() {
        let input: NewTodo = serde_json::from_str(r#"{"contnt":"something"}"#).unwrap();
        assert!(input.content.is_empty());
    }

    #[test]
    fn update_todo_missing_id_defaults_to_zero() {
        let input: UpdateTodo = serde_json::from_str(r#"{"content":"something"}"#).unwrap();
        assert_eq!(input.id, 0);
        assert_eq!(input.content, "something");
    }

    #[test]
    fn update_todo_rejects_non_object_body() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"[1,2,3]"#);
        assert!(result.is_err());
    }
}
