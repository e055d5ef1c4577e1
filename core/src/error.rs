//! Error types for store operations.
//!
//! # Design
//! The store never recovers from either variant itself. Both carry the id
//! involved so callers can log or report it. Neither leaves a partial effect
//! behind: when an operation returns `Err`, the map is untouched.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record has this id.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The id source produced an id that already keys a live record, and the
    /// single retry collided as well. Safe for the caller to retry.
    #[error("todo id {0} is already in use")]
    Conflict(TodoId),
}
