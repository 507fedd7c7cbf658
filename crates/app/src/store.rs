use dioxus::prelude::*;
use shared_types::{AppError, LevelProgress, Todo, TodoBoard, TodoFilter, TodoId};

/// Reactive handle on the dashboard's to-do board and filter selection.
///
/// The board is only reachable through these methods, so every write goes
/// through a `TodoBoard` operation and re-renders whoever read it.
#[derive(Clone, Copy, PartialEq)]
pub struct TodoStore {
    board: Signal<TodoBoard>,
    filter: Signal<TodoFilter>,
}

impl TodoStore {
    pub fn new(seed_examples: bool) -> Self {
        let board = if seed_examples {
            TodoBoard::new().with_seed_examples()
        } else {
            TodoBoard::new()
        };
        Self {
            board: Signal::new(board),
            filter: Signal::new(TodoFilter::default()),
        }
    }

    pub fn create(&mut self, title: &str) -> Result<TodoId, AppError> {
        self.board.write().create(title)
    }

    pub fn edit(&mut self, id: TodoId, new_title: &str) -> Result<(), AppError> {
        self.board.write().edit(id, new_title)
    }

    pub fn delete(&mut self, id: TodoId) -> Result<Todo, AppError> {
        self.board.write().delete(id)
    }

    pub fn toggle_completed(&mut self, id: TodoId) -> Result<bool, AppError> {
        self.board.write().toggle_completed(id)
    }

    pub fn filter(&self) -> TodoFilter {
        *self.filter.read()
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        if self.filter() != filter {
            tracing::debug!(%filter, "filter changed");
            self.filter.set(filter);
        }
    }

    /// To-dos matching the current filter, re-derived on every call.
    pub fn visible(&self) -> Vec<Todo> {
        let filter = self.filter();
        self.board
            .read()
            .visible(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn progress(&self) -> LevelProgress {
        self.board.read().progress()
    }
}

/// Hook to access the to-do store.
pub fn use_todo_store() -> TodoStore {
    use_context::<TodoStore>()
}

/// Render `body` below a provided store after `setup` has run against it.
#[cfg(test)]
pub(crate) fn render_with_store(seed: bool, setup: fn(TodoStore), body: fn() -> Element) -> String {
    #[component]
    fn StoreHost(seed: bool, setup: fn(TodoStore), body: fn() -> Element) -> Element {
        let store = use_context_provider(|| TodoStore::new(seed));
        use_hook(|| setup(store));
        body()
    }

    let mut dom = VirtualDom::new_with_props(StoreHost, StoreHostProps { seed, setup, body });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
