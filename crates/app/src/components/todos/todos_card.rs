use dioxus::prelude::*;
use shared_types::{TodoFilter, ALL_FILTERS};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction, CardContent, CardHeader,
    CardTitle, DialogContent, DialogDescription, DialogHeader, DialogRoot, DialogTitle,
};

use super::create_form::CreateTodoForm;
use super::filter_button::FilterButton;
use super::summary::XpSummary;
use super::todo_item::TodoItem;
use crate::format_helpers::todo_count_label;
use crate::store::use_todo_store;

fn empty_message(filter: TodoFilter) -> &'static str {
    match filter {
        TodoFilter::All => "Nothing here yet. Create a task to get started.",
        TodoFilter::Active => "No active tasks.",
        TodoFilter::Completed => "No completed tasks yet.",
    }
}

/// The to-do card: header with count and create dialog, XP summary,
/// filter control and the filtered list.
#[component]
pub fn TodosCard() -> Element {
    let mut store = use_todo_store();
    let mut creating = use_signal(|| false);

    let active_filter = store.filter();
    let progress = store.progress();
    let visible = store.visible();
    let count = visible.len();
    let is_empty = visible.is_empty();
    let count_label = todo_count_label(count);
    let empty = empty_message(active_filter);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./todos.css") }

        Card { class: "todos-card",
            CardHeader {
                div { class: "todos-card-heading",
                    CardTitle { "\u{1F4D4} To-Do's App" }
                    Badge { variant: BadgeVariant::Count, aria_label: "{count_label}", "{count}" }
                }
                CardAction {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| creating.set(true),
                        "Create"
                    }
                }
            }
            CardContent {
                XpSummary { progress: progress }

                div { class: "todo-filters", role: "group", aria_label: "Filter tasks",
                    for filter in ALL_FILTERS.iter().copied() {
                        FilterButton {
                            key: "{filter}",
                            filter: filter,
                            is_pressed: filter == active_filter,
                            on_select: move |f: TodoFilter| store.set_filter(f),
                        }
                    }
                }

                if is_empty {
                    p { class: "todo-empty text-muted", "{empty}" }
                }
                ul { class: "todo-list", role: "list",
                    for (key, todo) in visible.into_iter().map(|t| (t.id().to_string(), t)) {
                        TodoItem { key: "{key}", todo: todo }
                    }
                }
            }
        }

        DialogRoot {
            open: creating(),
            on_open_change: move |open: bool| creating.set(open),
            DialogContent {
                DialogHeader {
                    DialogTitle { "\u{1F3AF} Create a task" }
                    DialogDescription {
                        "Add a new task here. Click save when you're done."
                    }
                }
                CreateTodoForm {}
            }
        }
    }
}
