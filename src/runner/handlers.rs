//! Dispatch of parsed commands into the manager.

use anyhow::{anyhow, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::app::sample::random_item_with;
use crate::app::settings::Settings;
use crate::app::{TodoItem, TodoListManager};
use crate::runner::commands::Command;

/// Everything one driver run operates on.
pub struct Session {
    pub manager: TodoListManager,
    pub settings: Settings,
    rng: StdRng,
}

/// What the driver loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

impl Session {
    /// New session with an empty list. `seed` makes `random` repeatable.
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Session {
            manager: TodoListManager::new(),
            settings,
            rng,
        }
    }

    fn editing(&self) -> anyhow::Result<&TodoItem> {
        self.manager
            .current_edit_item()
            .ok_or_else(|| anyhow!("no item is being edited (use `edit ID` first)"))
    }
}

/// Apply `cmd` to the session.
///
/// Manager errors are returned unchanged inside the `anyhow::Error` so the
/// caller can recover the [`crate::errors::TodoError`] with `downcast_ref`.
pub fn handle_command(session: &mut Session, cmd: Command) -> anyhow::Result<Outcome> {
    match cmd {
        Command::Add {
            task,
            category,
            icon,
        } => {
            let item = session.settings.new_item(task, category, icon);
            info!(id = %item.id(), "add");
            session.manager.add_item(item);
        }
        Command::Random => {
            let item = random_item_with(&mut session.rng);
            info!(id = %item.id(), task = item.task(), "add random");
            session.manager.add_item(item);
        }
        Command::Remove(id) => {
            if session.manager.remove_by_id(id).is_none() {
                info!(%id, "remove of missing item ignored");
            }
        }
        Command::Edit(id) => session.manager.select_by_id(id)?,
        Command::Set(task) => {
            let edited = session.editing()?.with_task(task);
            session.manager.on_edit_item_change(edited)?;
        }
        Command::SetCategory(category) => {
            let edited = session.editing()?.with_category(category);
            session.manager.on_edit_item_change(edited)?;
        }
        Command::SetIcon(icon) => {
            let edited = session.editing()?.with_icon(icon);
            session.manager.on_edit_item_change(edited)?;
        }
        Command::Change { id, task } => {
            let target = session
                .manager
                .get(id)
                .with_context(|| format!("item #{id} is not in the list"))?;
            let edited = target.with_task(task);
            session.manager.on_edit_item_change(edited)?;
        }
        Command::Done => session.manager.on_edit_done(),
        Command::Delete => {
            let id = session.editing()?.id();
            session.manager.remove_by_id(id);
        }
        Command::Quit => return Ok(Outcome::Quit),
        Command::List | Command::Help => {}
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Category, TodoIcon};
    use crate::errors::TodoError;

    fn session() -> Session {
        Session::new(Settings::default(), Some(7))
    }

    fn add(s: &mut Session, task: &str) {
        handle_command(
            s,
            Command::Add {
                task: task.into(),
                category: None,
                icon: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn edit_flow_through_commands() {
        let mut s = session();
        add(&mut s, "a");
        let id = s.manager.items()[0].id();
        handle_command(&mut s, Command::Edit(id)).unwrap();
        handle_command(&mut s, Command::Set("b".into())).unwrap();
        handle_command(&mut s, Command::SetCategory(Category::Work)).unwrap();
        handle_command(&mut s, Command::SetIcon(TodoIcon::Done)).unwrap();
        let item = &s.manager.items()[0];
        assert_eq!(item.task(), "b");
        assert_eq!(item.category(), Category::Work);
        assert_eq!(item.icon(), TodoIcon::Done);
        handle_command(&mut s, Command::Done).unwrap();
        assert!(!s.manager.is_editing());
    }

    #[test]
    fn change_against_other_item_surfaces_mismatch() {
        let mut s = session();
        add(&mut s, "a");
        add(&mut s, "b");
        let a = s.manager.items()[0].id();
        let b = s.manager.items()[1].id();
        handle_command(&mut s, Command::Edit(a)).unwrap();
        let err = handle_command(
            &mut s,
            Command::Change {
                id: b,
                task: "x".into(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TodoError>(),
            Some(&TodoError::EditMismatch {
                selected: Some(a),
                attempted: b,
            })
        );
        assert_eq!(s.manager.items()[1].task(), "b");
    }

    #[test]
    fn set_without_selection_fails() {
        let mut s = session();
        add(&mut s, "a");
        let err = handle_command(&mut s, Command::Set("x".into())).unwrap_err();
        assert!(err.to_string().contains("no item is being edited"));
    }

    #[test]
    fn delete_removes_edited_item() {
        let mut s = session();
        add(&mut s, "a");
        add(&mut s, "b");
        let a = s.manager.items()[0].id();
        handle_command(&mut s, Command::Edit(a)).unwrap();
        handle_command(&mut s, Command::Delete).unwrap();
        assert_eq!(s.manager.len(), 1);
        assert_eq!(s.manager.items()[0].task(), "b");
        assert!(!s.manager.is_editing());
    }

    #[test]
    fn seeded_random_is_repeatable() {
        let mut one = session();
        let mut two = session();
        handle_command(&mut one, Command::Random).unwrap();
        handle_command(&mut two, Command::Random).unwrap();
        assert_eq!(one.manager.items()[0].task(), two.manager.items()[0].task());
    }

    #[test]
    fn quit_stops() {
        let mut s = session();
        assert_eq!(handle_command(&mut s, Command::Quit).unwrap(), Outcome::Quit);
        assert_eq!(handle_command(&mut s, Command::List).unwrap(), Outcome::Continue);
    }
}
