use serde::Serialize;
use tracing::debug;

use self::notify::Subscribers;
pub use self::notify::SubscriptionId;
use super::types::{EditState, ListChange, TodoId, TodoItem};

/// In-memory state behind the to-do screen.
///
/// Owns the ordered list of items and at most one edit selection. The
/// selection is stored as an id and resolved against `items` on every read,
/// so the current edit item is always an element of the list.
///
/// The manager is single-threaded: subscriber callbacks are plain `FnMut`
/// closures and nothing here is synchronised. Share it across threads only
/// behind an external lock.
pub struct TodoListManager {
    items: Vec<TodoItem>,
    editing: Option<TodoId>,
    revision: u64,
    subscribers: Subscribers,
}

// submodules live in `src/app/core/`
mod edit;
mod notify;

impl Default for TodoListManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListManager {
    pub fn new() -> Self {
        TodoListManager {
            items: Vec::new(),
            editing: None,
            revision: 0,
            subscribers: Subscribers::default(),
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item with `id`, if present.
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|it| it.id() == id)
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|it| it.id() == id)
    }

    /// Counter bumped on every observable change. Pollers compare it with
    /// the value they last rendered.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append `item` to the end of the list.
    pub fn add_item(&mut self, item: TodoItem) {
        let id = item.id();
        self.items.push(item);
        let index = self.items.len() - 1;
        debug!(%id, index, "added todo item");
        self.emit(ListChange::Added { index, id });
    }

    /// Remove the entry with `item`'s identity.
    ///
    /// Returns `false` and leaves the state untouched when no such entry
    /// exists. Removing the item being edited also ends the edit session.
    pub fn remove_item(&mut self, item: &TodoItem) -> bool {
        self.remove_by_id(item.id()).is_some()
    }

    /// Remove the entry with `id`, returning it if it was present.
    pub fn remove_by_id(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        debug!(%id, index, "removed todo item");
        self.emit(ListChange::Removed { index, id });
        if self.editing == Some(id) {
            self.editing = None;
            debug!(%id, "edit session ended by removal");
            self.emit(ListChange::EditCleared);
        }
        Some(removed)
    }

    /// Item currently selected for editing.
    pub fn current_edit_item(&self) -> Option<&TodoItem> {
        self.editing.and_then(|id| self.get(id))
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn edit_state(&self) -> EditState<'_> {
        match self.current_edit_item() {
            Some(item) => EditState::Editing(item),
            None => EditState::Idle,
        }
    }

    /// Owned, serialisable copy of what the presentation layer renders.
    pub fn snapshot(&self) -> ListView {
        ListView {
            revision: self.revision,
            items: self.items.clone(),
            editing: self.editing,
        }
    }

    /// Register `callback` to run after every observable change.
    pub fn subscribe(&mut self, callback: impl FnMut(&ListChange) + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(callback))
    }

    /// Drop a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn emit(&mut self, change: ListChange) {
        self.revision += 1;
        self.subscribers.notify(&change);
    }
}

/// Point-in-time view of the list and its edit selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub revision: u64,
    pub items: Vec<TodoItem>,
    pub editing: Option<TodoId>,
}
