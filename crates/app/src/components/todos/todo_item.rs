use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdEllipsis;
use dioxus_free_icons::Icon;
use shared_types::Todo;
use shared_ui::{
    Button, ButtonType, ButtonVariant, Checkbox, DialogContent, DialogDescription, DialogFooter,
    DialogHeader, DialogRoot, DialogTitle, Form, FormError, Input, Label,
};

use crate::store::use_todo_store;

/// A single row of the to-do list with its edit dialog.
#[component]
pub fn TodoItem(todo: Todo) -> Element {
    let mut store = use_todo_store();
    let mut editing = use_signal(|| false);

    let id = todo.id();
    let dom_id = id.to_string();
    let title = todo.title().to_string();
    let completed = todo.completed();
    let time_taken = todo.time_taken().map(str::to_string);

    let handle_toggle = move |_: bool| {
        if let Err(e) = store.toggle_completed(id) {
            tracing::warn!(error = %e, "could not toggle todo");
        }
    };

    rsx! {
        li { class: "todo",
            div { class: "todo-row",
                div { class: "todo-main",
                    Checkbox { id: "{dom_id}", initially_checked: completed, on_change: handle_toggle }
                    Label { html_for: dom_id.clone(), done: completed, "{title}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "todo-menu-button",
                    onclick: move |_| editing.set(true),
                    span { class: "sr-only", "Open menu" }
                    Icon::<LdEllipsis> { icon: LdEllipsis, width: 16, height: 16 }
                }
            }
            if let Some(taken) = time_taken {
                div { class: "todo-time-taken text-muted", "Time taken: {taken}" }
            }
            DialogRoot {
                open: editing(),
                on_open_change: move |open: bool| editing.set(open),
                DialogContent {
                    DialogHeader {
                        DialogTitle { "\u{1F4DD}Edit task" }
                        DialogDescription {
                            "Make changes to your task here. Click save when you're done."
                        }
                    }
                    EditTodoForm { todo: todo.clone(), on_done: move |_| editing.set(false) }
                }
            }
        }
    }
}

/// Rename or delete form shown inside the edit dialog.
#[component]
fn EditTodoForm(todo: Todo, on_done: EventHandler<()>) -> Element {
    let mut store = use_todo_store();
    let mut new_title = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let id = todo.id();
    let input_id = format!("edit-{id}");
    let current_title = todo.title().to_string();
    let xp = todo.xp();

    let handle_submit = move |_: FormEvent| {
        let value = new_title();
        match store.edit(id, &value) {
            Ok(()) => {
                new_title.set(String::new());
                error.set(None);
                on_done.call(());
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(error = %e, "edited todo no longer exists");
                on_done.call(());
            }
            Err(e) => error.set(Some(e.field_message("title"))),
        }
    };

    let handle_delete = move |_: MouseEvent| {
        if let Err(e) = store.delete(id) {
            tracing::warn!(error = %e, "could not delete todo");
        }
        on_done.call(());
    };

    rsx! {
        Form { onsubmit: handle_submit, class: "edit-todo-form",
            small { class: "text-muted", "Experience Points: {xp}+" }
            Input {
                id: "{input_id}",
                value: new_title(),
                placeholder: current_title,
                invalid: error().is_some(),
                on_input: move |evt: FormEvent| new_title.set(evt.value()),
            }
            FormError { message: error() }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: handle_delete,
                    "Delete"
                }
                Button { button_type: ButtonType::Submit, "Save" }
            }
        }
    }
}
