//! Random sample items for the "add random todo" action.

use rand::Rng;

use super::types::{Category, TodoIcon, TodoItem};

/// Task texts the random generator picks from.
pub const SAMPLE_TASKS: [&str; 9] = [
    "Learn compose",
    "Learn state",
    "Build dynamic UIs",
    "Learn Unidirectional Data Flow",
    "Integrate LiveData",
    "Integrate ViewModel",
    "Remember to savedState!",
    "Build stateless composables",
    "Use state from stateless composables",
];

/// Build an item with a random sample task, category and icon using `rng`.
pub fn random_item_with<R: Rng + ?Sized>(rng: &mut R) -> TodoItem {
    let task = SAMPLE_TASKS[rng.random_range(0..SAMPLE_TASKS.len())];
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    let icon = TodoIcon::ALL[rng.random_range(0..TodoIcon::ALL.len())];
    TodoItem::with_details(task, category, Some(icon))
}

/// Build a random item from the thread-local generator.
pub fn generate_random_item() -> TodoItem {
    random_item_with(&mut rand::rng())
}
