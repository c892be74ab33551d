pub mod app;
pub mod errors;
pub mod runner;
pub mod ui;

// Test-only helpers. Enabled via the `test-helpers` feature in Cargo.toml so
// production builds don't include test scaffolding.
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use crate::app::{Category, EditState, ListChange, TodoIcon, TodoId, TodoItem, TodoListManager};
pub use crate::errors::TodoError;
