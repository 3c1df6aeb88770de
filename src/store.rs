//! In-memory todo store.
//!
//! Process-lifetime only: every record vanishes on restart. Ids come from a
//! monotonic counter starting at 1 and are never reused, so no two live
//! records can share an id. The store is plain data; sharing and locking
//! happen at the `Db` alias level so handlers receive an explicitly owned
//! handle instead of reaching for global state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{Todo, TodoInput};

/// Shared handle injected into handlers via axum `State`.
pub type Db = Arc<RwLock<TodoStore>>;

#[derive(Debug, Default)]
pub struct TodoStore {
    next_id: u64,
    items: HashMap<u64, Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record, assigning the next id.
    pub fn insert(&mut self, input: TodoInput) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            name: input.name,
            is_complete: input.is_complete,
        };
        self.items.insert(todo.id, todo.clone());
        todo
    }

    pub fn get(&self, id: u64) -> Option<Todo> {
        self.items.get(&id).cloned()
    }

    /// All records, sorted by id for deterministic output.
    pub fn list(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.items.values().cloned().collect();
        todos.sort_by_key(|t| t.id);
        todos
    }

    /// Records with `is_complete == true`, sorted by id.
    pub fn list_complete(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self
            .items
            .values()
            .filter(|t| t.is_complete)
            .cloned()
            .collect();
        todos.sort_by_key(|t| t.id);
        todos
    }

    /// Overwrites `name` and `is_complete` in place; the id is immutable.
    /// Returns false when no record with that id exists.
    pub fn update(&mut self, id: u64, input: TodoInput) -> bool {
        match self.items.get_mut(&id) {
            Some(todo) => {
                todo.name = input.name;
                todo.is_complete = input.is_complete;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the record, if present.
    pub fn remove(&mut self, id: u64) -> Option<Todo> {
        self.items.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> TodoInput {
        TodoInput {
            name: Some(name.to_string()),
            is_complete: false,
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut store = TodoStore::new();
        let a = store.insert(input("a"));
        let b = store.insert(input("b"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = TodoStore::new();
        let a = store.insert(input("a"));
        store.remove(a.id);
        let b = store.insert(input("b"));
        assert_ne!(b.id, a.id);
    }

    #[test]
    fn get_returns_inserted_record() {
        let mut store = TodoStore::new();
        let todo = store.insert(input("buy milk"));
        let fetched = store.get(todo.id).unwrap();
        assert_eq!(fetched, todo);
        assert!(store.get(999).is_none());
    }

    #[test]
    fn list_complete_filters_and_sorts() {
        let mut store = TodoStore::new();
        store.insert(input("open"));
        let done = store.insert(TodoInput {
            name: Some("done".to_string()),
            is_complete: true,
        });
        let also_done = store.insert(TodoInput {
            name: Some("also done".to_string()),
            is_complete: true,
        });

        let complete = store.list_complete();
        assert_eq!(complete.len(), 2);
        assert_eq!(complete[0].id, done.id);
        assert_eq!(complete[1].id, also_done.id);
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let mut store = TodoStore::new();
        let todo = store.insert(input("before"));
        let updated = store.update(
            todo.id,
            TodoInput {
                name: Some("after".to_string()),
                is_complete: true,
            },
        );
        assert!(updated);

        let fetched = store.get(todo.id).unwrap();
        assert_eq!(fetched.id, todo.id);
        assert_eq!(fetched.name.as_deref(), Some("after"));
        assert!(fetched.is_complete);
    }

    #[test]
    fn update_missing_id_returns_false() {
        let mut store = TodoStore::new();
        assert!(!store.update(1, input("nope")));
    }

    #[test]
    fn remove_returns_the_removed_record() {
        let mut store = TodoStore::new();
        let todo = store.insert(input("gone"));
        let removed = store.remove(todo.id).unwrap();
        assert_eq!(removed, todo);
        assert!(store.remove(todo.id).is_none());
        assert!(store.list().is_empty());
    }
}
