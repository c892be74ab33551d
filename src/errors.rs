use crate::app::types::TodoId;
use thiserror::Error;

/// Errors raised by [`crate::app::TodoListManager`] when the caller drives
/// the edit flow out of sequence.
///
/// These indicate a bug in the calling presentation layer rather than a
/// recoverable runtime condition, so callers should surface them instead of
/// ignoring them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// An edit was committed while no item was selected, or against an item
    /// other than the selected one.
    #[error("{}", describe_mismatch(.selected, .attempted))]
    EditMismatch {
        selected: Option<TodoId>,
        attempted: TodoId,
    },

    /// The referenced item is not part of the list.
    #[error("item #{0} is not in the list")]
    NotInList(TodoId),
}

fn describe_mismatch(selected: &Option<TodoId>, attempted: &TodoId) -> String {
    match selected {
        None => format!("cannot edit item #{attempted}: no item is selected for editing"),
        Some(sel) => format!("cannot edit item #{attempted}: item #{sel} is selected for editing"),
    }
}

/// Render a `TodoError` as a single user-facing line prefixed with the
/// script line it came from, when known.
pub fn render_todo_error(err: &TodoError, line: Option<usize>) -> String {
    match line {
        Some(n) => format!("line {n}: {err}"),
        None => err.to_string(),
    }
}
