use tracing::{debug, warn};

use super::*;
use crate::errors::TodoError;

impl TodoListManager {
    /// Start editing `item`. The item must be in the list.
    ///
    /// Selecting while another item is being edited moves the selection.
    pub fn on_edit_item_selected(&mut self, item: &TodoItem) -> Result<(), TodoError> {
        self.select_by_id(item.id())
    }

    /// Start editing the entry with `id`.
    pub fn select_by_id(&mut self, id: TodoId) -> Result<(), TodoError> {
        if self.position(id).is_none() {
            warn!(%id, "edit selection for an item not in the list");
            return Err(TodoError::NotInList(id));
        }
        self.editing = Some(id);
        debug!(%id, "edit session started");
        self.emit(ListChange::EditSelected { id });
        Ok(())
    }

    /// Commit `item` as the new value of the entry being edited.
    ///
    /// `item` must carry the selected entry's id; anything else is an
    /// [`TodoError::EditMismatch`] and leaves the list unchanged. The edit
    /// session stays open on the new value.
    pub fn on_edit_item_change(&mut self, item: TodoItem) -> Result<(), TodoError> {
        let attempted = item.id();
        let index = match self.editing {
            Some(selected) if selected == attempted => self.position(selected),
            _ => None,
        };
        let Some(index) = index else {
            warn!(selected = ?self.editing, %attempted, "edit committed out of sequence");
            return Err(TodoError::EditMismatch {
                selected: self.editing,
                attempted,
            });
        };
        self.items[index] = item;
        debug!(id = %attempted, index, "edited todo item replaced");
        self.emit(ListChange::Replaced {
            index,
            id: attempted,
        });
        Ok(())
    }

    /// End the edit session. Does nothing when no item is being edited.
    pub fn on_edit_done(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(%id, "edit session finished");
            self.emit(ListChange::EditCleared);
        }
    }
}
