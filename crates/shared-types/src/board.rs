use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;
use crate::progress::{earned_xp, level_progress, LevelProgress};
use crate::todo::{filter_todos, Todo, TodoFilter, TodoId};

/// Exclusive upper bound for XP awarded to a new to-do.
pub const MAX_TODO_XP: u32 = 100;

// ---------------------------------------------------------------------------
// Injected sources
// ---------------------------------------------------------------------------

/// Supplies the XP value for each newly created to-do.
pub trait XpSource {
    fn next_xp(&mut self) -> u32;
}

/// Uniform XP in `[0, MAX_TODO_XP)` from an entropy-seeded RNG.
pub struct RandomXp {
    rng: StdRng,
}

impl Default for RandomXp {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomXp {
    /// Deterministic generator, mostly useful in tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl XpSource for RandomXp {
    fn next_xp(&mut self) -> u32 {
        self.rng.gen_range(0..MAX_TODO_XP)
    }
}

impl<F: FnMut() -> u32> XpSource for F {
    fn next_xp(&mut self) -> u32 {
        self()
    }
}

/// Supplies "now" for creation and completion timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F: Fn() -> DateTime<Utc>> Clock for F {
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The authoritative in-memory to-do list.
///
/// Every mutation goes through one of the methods below and is followed by a
/// full recomputation of [`LevelProgress`] over the whole list.
pub struct TodoBoard<X = RandomXp, C = SystemClock> {
    todos: Vec<Todo>,
    progress: LevelProgress,
    xp_source: X,
    clock: C,
}

impl TodoBoard {
    /// Empty board with random XP and the system clock.
    pub fn new() -> Self {
        Self::with_sources(RandomXp::default(), SystemClock)
    }
}

impl Default for TodoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: XpSource, C: Clock> TodoBoard<X, C> {
    pub fn with_sources(xp_source: X, clock: C) -> Self {
        Self {
            todos: Vec::new(),
            progress: LevelProgress::default(),
            xp_source,
            clock,
        }
    }

    /// Add the three example to-dos shown on a fresh dashboard.
    pub fn with_seed_examples(mut self) -> Self {
        let now = self.clock.now();

        let mut eat = Todo::new("Eat".to_string(), 10, now - Duration::hours(1));
        eat.mark_completed(now);
        self.todos.push(eat);
        self.todos
            .push(Todo::new("Sleep".to_string(), 20, now - Duration::minutes(30)));
        self.todos.push(Todo::new("Repeat".to_string(), 40, now));

        self.recompute();
        tracing::debug!(count = self.todos.len(), "seeded example todos");
        self
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of to-dos not yet completed.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed()).count()
    }

    pub fn progress(&self) -> LevelProgress {
        self.progress
    }

    /// To-dos accepted by `filter`, in list order.
    pub fn visible(&self, filter: TodoFilter) -> Vec<&Todo> {
        filter_todos(&self.todos, filter)
    }

    /// Append a new active to-do and return its id.
    pub fn create(&mut self, title: &str) -> Result<TodoId, AppError> {
        let title = normalize_title(title)?;
        let xp = self.xp_source.next_xp() % MAX_TODO_XP;
        let todo = Todo::new(title, xp, self.clock.now());
        let id = todo.id();

        self.todos.push(todo);
        self.recompute();
        tracing::info!(%id, xp, "todo created");
        Ok(id)
    }

    /// Replace the title of an existing to-do, leaving every other field alone.
    pub fn edit(&mut self, id: TodoId, new_title: &str) -> Result<(), AppError> {
        let todo = self.find_mut(id)?;
        let title = normalize_title(new_title)?;
        todo.set_title(title);

        self.recompute();
        tracing::info!(%id, "todo renamed");
        Ok(())
    }

    /// Remove a to-do permanently, returning it.
    pub fn delete(&mut self, id: TodoId) -> Result<Todo, AppError> {
        let pos = self
            .todos
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.todos.remove(pos);

        self.recompute();
        tracing::info!(%id, "todo deleted");
        Ok(removed)
    }

    /// Flip completion and return the new state.
    pub fn toggle_completed(&mut self, id: TodoId) -> Result<bool, AppError> {
        let now = self.clock.now();
        let todo = self.find_mut(id)?;
        if todo.completed() {
            todo.mark_active();
        } else {
            todo.mark_completed(now);
        }
        let completed = todo.completed();

        self.recompute();
        tracing::info!(
            %id,
            completed,
            level = self.progress.level,
            total_xp = self.progress.total_xp,
            "todo toggled"
        );
        Ok(completed)
    }

    fn find_mut(&mut self, id: TodoId) -> Result<&mut Todo, AppError> {
        self.todos
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| not_found(id))
    }

    fn recompute(&mut self) {
        self.progress = level_progress(earned_xp(&self.todos));
    }
}

fn not_found(id: TodoId) -> AppError {
    tracing::warn!(%id, "todo not found");
    AppError::not_found(format!("Todo {id} not found"))
}

/// Trim a title and reject it when nothing is left.
fn normalize_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_field("title", "Title cannot be empty"));
    }
    Ok(trimmed.to_string())
}
