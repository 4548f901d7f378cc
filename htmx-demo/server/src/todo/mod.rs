//! To-do items and the repository that owns them.
//!
//! The repository keeps an ordered, in-memory collection of [`TodoItem`]s.
//! Items are appended on creation, flipped between active and completed by
//! toggling, and removed by deletion. Survivors never change position.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod api;
pub mod id;
pub mod render;
pub mod web;

/// Title of the item every fresh repository starts with.
pub const INITIAL_TODO_TITLE: &str = "initial item";

#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct TodoItem {
    id: String,
    title: String,
    done: bool,
}

impl TodoItem {
    pub fn new(id: String, title: String, done: bool) -> Self {
        Self { id, title, done }
    }

    /// Returns the ID of the item. Always starts with an ASCII letter.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title of the item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the item has been completed.
    pub fn done(&self) -> bool {
        self.done
    }
}

/// Error type for TodoRepository operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoServiceError {
    /// No item with the given ID exists.
    #[error("Todo item with ID '{0}' not found")]
    NotFound(String),
}

/// Operations on the to-do collection.
///
/// Implementations own the collection exclusively and hand out clones, so
/// every call observes and leaves the collection in a consistent state.
#[cfg_attr(test, mockall::automock)]
pub trait TodoRepository {
    /// Appends a new active item with a freshly generated ID.
    ///
    /// The title is taken as-is; empty titles are accepted.
    fn create(&self, title: String) -> TodoItem;

    /// Returns every item in creation order.
    fn list(&self) -> Vec<TodoItem>;

    /// Flips the `done` flag of the item with the given ID.
    ///
    /// # Returns
    ///
    /// The updated item, or [`TodoServiceError::NotFound`] if no item matches.
    fn toggle(&self, id: &str) -> Result<TodoItem, TodoServiceError>;

    /// Removes the item with the given ID and returns the remaining items.
    ///
    /// Deleting an unknown ID leaves the collection untouched.
    fn delete(&self, id: &str) -> Vec<TodoItem>;
}

/// Process-memory repository. State is lost on restart.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    items: Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoRepository {
    /// Creates a repository seeded with the initial item.
    pub fn new() -> Self {
        let seed = TodoItem::new(id::generate(), INITIAL_TODO_TITLE.to_string(), false);
        Self::with_items(vec![seed])
    }

    pub(crate) fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    // No operation panics while holding the lock, so a poisoned guard still
    // protects a consistent collection.
    fn items(&self) -> MutexGuard<'_, Vec<TodoItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    #[tracing::instrument(skip(self))]
    fn create(&self, title: String) -> TodoItem {
        let item = TodoItem::new(id::generate(), title, false);
        let mut items = self.items();
        items.push(item.clone());
        tracing::debug!("Created todo {} ({} items total)", item.id(), items.len());
        item
    }

    #[tracing::instrument(skip(self))]
    fn list(&self) -> Vec<TodoItem> {
        self.items().clone()
    }

    #[tracing::instrument(skip(self))]
    fn toggle(&self, id: &str) -> Result<TodoItem, TodoServiceError> {
        let mut items = self.items();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| TodoServiceError::NotFound(id.to_string()))?;
        item.done = !item.done;
        tracing::debug!("Toggled todo {} to done={}", item.id, item.done);
        Ok(item.clone())
    }

    #[tracing::instrument(skip(self))]
    fn delete(&self, id: &str) -> Vec<TodoItem> {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            tracing::debug!("No todo with ID {} to delete", id);
        } else {
            tracing::debug!("Deleted todo {}", id);
        }
        items.clone()
    }
}
