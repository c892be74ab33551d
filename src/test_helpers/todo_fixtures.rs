use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::sample::{generate_random_item, random_item_with};
use crate::app::{TodoItem, TodoListManager};

/// A random sample item with a fresh id.
pub fn generate_random_todo_item() -> TodoItem {
    generate_random_item()
}

/// `count` items drawn from a generator seeded with `seed`. Texts,
/// categories and icons repeat for the same seed; ids never do.
pub fn seeded_items(seed: u64, count: usize) -> Vec<TodoItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_item_with(&mut rng)).collect()
}

/// Manager prefilled with `items`, in order, with no edit selection.
pub fn manager_with_items(items: &[TodoItem]) -> TodoListManager {
    let mut mgr = TodoListManager::new();
    for item in items {
        mgr.add_item(item.clone());
    }
    mgr
}
