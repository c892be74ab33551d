// Test helpers used only by the test-suite. This module is gated behind the
// `test-helpers` cargo feature so it is not included in production builds.
//
// Purpose: provide seeded item generators and prefilled managers so
// integration tests don't need to hand-build lists.

pub mod todo_fixtures;

pub use todo_fixtures::{generate_random_todo_item, manager_with_items, seeded_items};
