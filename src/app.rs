pub mod core;
pub mod sample;
pub mod settings;
pub mod types;

pub use self::core::{ListView, SubscriptionId, TodoListManager};
pub use self::types::{Category, EditState, ListChange, TodoIcon, TodoId, TodoItem};
