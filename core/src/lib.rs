//! In-memory todo store shared by the HTTP service.
//!
//! # Overview
//! `TodoStore` maps store-assigned integer ids to `Todo` records behind a
//! single reader/writer lock. It has no knowledge of HTTP; the server crate
//! decodes requests, calls the store and encodes the results.
//!
//! # Design
//! - One lock guards the map and the id source together; each operation holds
//!   it only for its own lookup or mutation.
//! - Callers always receive cloned records.
//! - Failures are `StoreError::NotFound` or `StoreError::Conflict`, never a
//!   partial write.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{IdSource, SequentialIds, TodoStore};
pub use types::{Todo, TodoId, TodoInput};
