use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::duration::time_taken;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Opaque identifier assigned to a to-do when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "todo-{}", self.0.simple())
    }
}

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A unit of work tracked on the dashboard.
///
/// Only [`crate::TodoBoard`] can change a to-do after creation, which keeps
/// `completed_at` and `time_taken` in lock-step with `completed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    xp: u32,
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_taken: Option<String>,
}

impl Todo {
    pub(crate) fn new(title: String, xp: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::new(),
            title,
            xp,
            completed: false,
            created_at,
            completed_at: None,
            time_taken: None,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn time_taken(&self) -> Option<&str> {
        self.time_taken.as_deref()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(now);
        self.time_taken = Some(time_taken(self.created_at, now));
    }

    pub(crate) fn mark_active(&mut self) {
        self.completed = false;
        self.completed_at = None;
        self.time_taken = None;
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Named view over the to-do list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// All filters in display order.
pub const ALL_FILTERS: &[TodoFilter] = &[TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

impl TodoFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Predicate applied to each to-do.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed(),
            TodoFilter::Completed => todo.completed(),
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sub-sequence of `todos` accepted by `filter`.
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}
