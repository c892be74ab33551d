use todo_state::app::{Category, EditState, TodoIcon, TodoItem, TodoListManager};
use todo_state::TodoError;

fn item(task: &str) -> TodoItem {
    TodoItem::with_details(task, Category::Personal, Some(TodoIcon::Square))
}

#[test]
fn add_appends_and_grows_by_one() {
    let mut mgr = TodoListManager::new();
    for n in 0..5 {
        let it = item(&format!("task {n}"));
        let before = mgr.len();
        mgr.add_item(it.clone());
        assert_eq!(mgr.len(), before + 1);
        assert_eq!(mgr.items().last(), Some(&it));
    }
}

#[test]
fn remove_first_of_two_leaves_second() {
    let mut mgr = TodoListManager::new();
    let a = item("a");
    let b = item("b");
    mgr.add_item(a.clone());
    mgr.add_item(b.clone());
    assert!(mgr.remove_item(&a));
    assert_eq!(mgr.items(), &[b]);
}

#[test]
fn fresh_manager_is_idle() {
    let mgr = TodoListManager::new();
    assert!(mgr.is_empty());
    assert_eq!(mgr.current_edit_item(), None);
    assert_eq!(mgr.edit_state(), EditState::Idle);
    assert_eq!(mgr.revision(), 0);
}

#[test]
fn adding_does_not_start_editing() {
    let mut mgr = TodoListManager::new();
    mgr.add_item(item("a"));
    assert_eq!(mgr.current_edit_item(), None);
}

#[test]
fn select_then_change_then_done() {
    let mut mgr = TodoListManager::new();
    let it = item("draft");
    mgr.add_item(it.clone());

    mgr.on_edit_item_selected(&it).unwrap();
    assert_eq!(mgr.current_edit_item(), Some(&it));

    let expected = it.with_task("task");
    mgr.on_edit_item_change(expected.clone()).unwrap();
    assert_eq!(mgr.items(), &[expected.clone()]);
    assert!(!mgr.items().contains(&it));

    mgr.on_edit_done();
    assert_eq!(mgr.current_edit_item(), None);
}

#[test]
fn editing_wrong_item_is_a_mismatch() {
    let mut mgr = TodoListManager::new();
    let item1 = item("one");
    let item2 = item("two");
    mgr.add_item(item1.clone());
    mgr.add_item(item2.clone());
    mgr.on_edit_item_selected(&item1).unwrap();

    let result = mgr.on_edit_item_change(item2.with_task("task"));
    assert!(matches!(result, Err(TodoError::EditMismatch { .. })));
    assert_eq!(mgr.items(), &[item1, item2]);
}

#[test]
fn change_without_selection_is_a_mismatch() {
    let mut mgr = TodoListManager::new();
    let it = item("lonely");
    let result = mgr.on_edit_item_change(it.clone());
    assert_eq!(
        result,
        Err(TodoError::EditMismatch {
            selected: None,
            attempted: it.id(),
        })
    );
    assert!(mgr.is_empty());
}

#[test]
fn same_text_items_are_distinct() {
    let mut mgr = TodoListManager::new();
    let a = item("twin");
    let b = item("twin");
    mgr.add_item(a.clone());
    mgr.add_item(b.clone());
    mgr.on_edit_item_selected(&b).unwrap();
    mgr.on_edit_item_change(b.with_task("renamed")).unwrap();
    assert_eq!(mgr.items()[0], a);
    assert_eq!(mgr.items()[1].task(), "renamed");
}
