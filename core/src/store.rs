//! Concurrent in-memory todo store.
//!
//! # Design
//! One `parking_lot::RwLock` guards both the record map and the id source, so
//! id assignment and the insert that uses it happen under the same exclusive
//! guard. Readers (`list_all`, `get`, `len`) share the lock; writers
//! (`insert`, `update`, `delete`) hold it exclusively. Every guard lives only
//! for the map access inside one method, which makes each operation
//! linearizable with respect to all others.
//!
//! Records leave the store as clones. Nothing outside this module can reach
//! into the map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use tracing::warn;

use crate::error::StoreError;
use crate::types::{Todo, TodoId, TodoInput};

/// Number of ids `insert` draws before giving up with `Conflict`.
const INSERT_ATTEMPTS: usize = 2;

/// Source of candidate ids for new records.
///
/// Called with the store's write lock held, so implementations need no
/// synchronization of their own. The store still checks every candidate
/// against the live keys and never overwrites an existing record.
pub trait IdSource: Send + Sync {
    fn next_id(&mut self) -> TodoId;
}

/// Strictly increasing counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: TodoId,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        let id = self.next;
        self.next += 1;
        id
    }
}

struct Inner {
    todos: HashMap<TodoId, Todo>,
    ids: Box<dyn IdSource>,
}

/// Thread-safe collection of todo records keyed by id.
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl TodoStore {
    /// Empty store assigning ids 1, 2, 3, ...
    pub fn new() -> Self {
        Self::with_id_source(SequentialIds::new())
    }

    pub fn with_id_source(ids: impl IdSource + 'static) -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: HashMap::new(),
                ids: Box::new(ids),
            }),
        }
    }

    /// Snapshot of every record. Order is unspecified.
    pub fn list_all(&self) -> Vec<Todo> {
        self.inner.read().todos.values().cloned().collect()
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.inner
            .read()
            .todos
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Store `input` under a fresh id and return the stored record.
    ///
    /// A candidate id that is already live is discarded and one more is
    /// drawn. If that one collides too, nothing is stored and
    /// `StoreError::Conflict` is returned.
    pub fn insert(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let mut guard = self.inner.write();
        let Inner { todos, ids } = &mut *guard;

        let mut rejected = 0;
        for _ in 0..INSERT_ATTEMPTS {
            let id = ids.next_id();
            match todos.entry(id) {
                Entry::Vacant(slot) => {
                    let todo = input.into_todo(id);
                    slot.insert(todo.clone());
                    return Ok(todo);
                }
                Entry::Occupied(_) => {
                    warn!(id, "id source produced an id that is already in use");
                    rejected = id;
                }
            }
        }
        Err(StoreError::Conflict(rejected))
    }

    /// Replace every field of record `id` except the id itself.
    pub fn update(&self, id: TodoId, input: TodoInput) -> Result<Todo, StoreError> {
        let mut guard = self.inner.write();
        let slot = guard.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = input.into_todo(id);
        Ok(slot.clone())
    }

    pub fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.inner
            .write()
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.inner.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore").field("len", &self.len()).finish()
    }
}
