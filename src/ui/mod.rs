//! Text views of the manager state for the line-oriented driver.
//!
//! Nothing here draws; it turns what the manager reports into lines of
//! text or a JSON document that the driver prints.

use crate::app::{ListView, TodoItem, TodoListManager};

/// Placeholder printed for an empty list.
pub const EMPTY_LIST: &str = "(no items)";

/// Format a single row. Rows for the item being edited start with `>`.
pub fn item_line(item: &TodoItem, editing: bool, show_ids: bool) -> String {
    let marker = if editing { '>' } else { ' ' };
    let id = if show_ids {
        format!("#{} ", item.id())
    } else {
        String::new()
    };
    format!(
        "{marker} {id}{} {} [{}]",
        item.icon().glyph(),
        item.task(),
        item.category()
    )
}

/// All rows of the list, in display order.
pub fn list_lines(mgr: &TodoListManager, show_ids: bool) -> Vec<String> {
    let editing = mgr.current_edit_item().map(|it| it.id());
    mgr.items()
        .iter()
        .map(|it| item_line(it, Some(it.id()) == editing, show_ids))
        .collect()
}

/// Plain-text list view terminated by a newline.
pub fn render_text(mgr: &TodoListManager, show_ids: bool) -> String {
    let lines = list_lines(mgr, show_ids);
    if lines.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Single-line JSON document of the current snapshot.
pub fn render_json(view: &ListView) -> serde_json::Result<String> {
    serde_json::to_string(view)
}
