use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of item identities. Starts at 1 so `0` never shows
/// up as a real id in listings.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a to-do item.
///
/// Ids are handed out from a monotonically increasing counter when an item
/// is created and are never reused or derived from the item's content. Two
/// items with the same text still have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Allocate the next unused id.
    pub fn next() -> Self {
        TodoId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TodoId)
    }
}

/// Error returned when a category or icon name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}` (expected one of: {expected})")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

/// Fixed set of categories a to-do item can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Business,
    Personal,
    Health,
    Work,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Business,
        Category::Personal,
        Category::Health,
        Category::Work,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Personal => "Personal",
            Category::Health => "Health",
            Category::Work => "Work",
            Category::Other => "Other",
        }
    }

    /// Icon used for a new item of this category when none is chosen.
    pub fn default_icon(self) -> TodoIcon {
        match self {
            Category::Business => TodoIcon::Event,
            Category::Personal => TodoIcon::Privacy,
            Category::Health => TodoIcon::Done,
            Category::Work => TodoIcon::Event,
            Category::Other => TodoIcon::Square,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownName {
                kind: "category",
                name: wanted.to_string(),
                expected: names(Category::ALL.iter().map(|c| c.name())),
            })
    }
}

/// Icon shown next to a to-do item.
///
/// The presentation layer decides how to draw it; the core only carries a
/// glyph and an accessible description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TodoIcon {
    #[default]
    Square,
    Done,
    Event,
    Privacy,
    Trash,
}

impl TodoIcon {
    pub const ALL: [TodoIcon; 5] = [
        TodoIcon::Square,
        TodoIcon::Done,
        TodoIcon::Event,
        TodoIcon::Privacy,
        TodoIcon::Trash,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TodoIcon::Square => "Square",
            TodoIcon::Done => "Done",
            TodoIcon::Event => "Event",
            TodoIcon::Privacy => "Privacy",
            TodoIcon::Trash => "Trash",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TodoIcon::Square => "□",
            TodoIcon::Done => "✓",
            TodoIcon::Event => "◷",
            TodoIcon::Privacy => "⚑",
            TodoIcon::Trash => "♻",
        }
    }

    /// Accessible description of the icon.
    pub fn content_description(self) -> &'static str {
        match self {
            TodoIcon::Square => "Expand",
            TodoIcon::Done => "Done",
            TodoIcon::Event => "Event",
            TodoIcon::Privacy => "Privacy",
            TodoIcon::Trash => "Trash",
        }
    }
}

impl fmt::Display for TodoIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TodoIcon {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TodoIcon::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownName {
                kind: "icon",
                name: wanted.to_string(),
                expected: names(TodoIcon::ALL.iter().map(|i| i.name())),
            })
    }
}

fn names<'a>(it: impl Iterator<Item = &'a str>) -> String {
    it.collect::<Vec<_>>().join(", ")
}

/// A single to-do entry.
///
/// Items are immutable values: the `with_*` methods return a modified copy
/// that keeps the same [`TodoId`], which is how edits are expressed.
/// `PartialEq` compares the full value; use [`TodoItem::same_item`] to ask
/// whether two values refer to the same logical entry.
///
/// Items serialize for views but never deserialize: the only way to get a
/// `TodoId` is the counter behind [`TodoId::next`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: TodoId,
    task: String,
    category: Category,
    icon: TodoIcon,
}

impl TodoItem {
    /// Create an item in the default category with that category's icon.
    pub fn new(task: impl Into<String>) -> Self {
        Self::with_details(task, Category::default(), None)
    }

    /// Create an item with an explicit category and an optional icon. When
    /// `icon` is `None` the category's default icon is used.
    pub fn with_details(task: impl Into<String>, category: Category, icon: Option<TodoIcon>) -> Self {
        TodoItem {
            id: TodoId::next(),
            task: task.into(),
            category,
            icon: icon.unwrap_or_else(|| category.default_icon()),
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn icon(&self) -> TodoIcon {
        self.icon
    }

    /// True when both values carry the same identity, regardless of text.
    pub fn same_item(&self, other: &TodoItem) -> bool {
        self.id == other.id
    }

    pub fn with_task(&self, task: impl Into<String>) -> Self {
        TodoItem {
            task: task.into(),
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Category) -> Self {
        TodoItem {
            category,
            ..self.clone()
        }
    }

    pub fn with_icon(&self, icon: TodoIcon) -> Self {
        TodoItem {
            icon,
            ..self.clone()
        }
    }
}

/// Edit-session state as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState<'a> {
    Idle,
    Editing(&'a TodoItem),
}

/// A single observable change to the manager's state. Delivered to
/// subscribers after the change has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Added { index: usize, id: TodoId },
    Removed { index: usize, id: TodoId },
    Replaced { index: usize, id: TodoId },
    EditSelected { id: TodoId },
    EditCleared,
}
