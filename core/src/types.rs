//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is the stored record and always carries a store-assigned id.
//! `TodoInput` is what callers hand to `insert` and `update`: it has no id
//! field at all, so a client-supplied id in the JSON payload is dropped during
//! decoding instead of reaching the store. Missing fields decode to their zero
//! values; the service does no validation beyond type decoding.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Always positive.
pub type TodoId = u64;

/// A single todo record as held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Payload for creating a todo or replacing an existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Attach an id, producing the record the store keeps.
    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_wire_field_names() {
        let todo = TodoInput::new("Test", "desc", false).into_todo(7);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "desc");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":42,"title":"A","description":"d","completed":true}"#)
                .unwrap();
        assert_eq!(input, TodoInput::new("A", "d", true));
    }

    #[test]
    fn input_missing_fields_default_to_zero_values() {
        let input: TodoInput = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.description.is_empty());
        assert!(!input.completed);

        let empty: TodoInput = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TodoInput::default());
    }

    #[test]
    fn input_rejects_wrong_field_types() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"completed":"yes"}"#);
        assert!(result.is_err());

        let result: Result<TodoInput, _> = serde_json::from_str(r#""just a title""#);
        assert!(result.is_err());
    }

    #[test]
    fn input_decoding_is_strict_serde() {
        assert!(serde_json::from_str::<TodoInput>("null").is_err());
        assert!(serde_json::from_str::<TodoInput>(r#"{"title":"A"} {"title":"B"}"#).is_err());

        let input: TodoInput = serde_json::from_str(r#"{"Title":"A"}"#).unwrap();
        assert!(input.title.is_empty());
    }
}
