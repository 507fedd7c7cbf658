use dioxus::prelude::*;
use shared_ui::{Button, ButtonType, Form, FormError, Input};

use crate::store::{use_todo_store, TodoStore};

/// Create a to-do from the field value. Returns the inline message for a
/// rejected title.
fn create_from_input(store: &mut TodoStore, value: &str) -> Option<String> {
    match store.create(value) {
        Ok(id) => {
            tracing::debug!(%id, "todo created from form");
            None
        }
        Err(e) => Some(e.field_message("title")),
    }
}

/// Text field and submit button that add a to-do.
///
/// The field is cleared after every successful submit so several tasks can
/// be entered in a row.
#[component]
pub fn CreateTodoForm() -> Element {
    let mut store = use_todo_store();
    let mut title = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: FormEvent| {
        let value = title();
        match create_from_input(&mut store, &value) {
            None => {
                title.set(String::new());
                error.set(None);
            }
            Some(message) => error.set(Some(message)),
        }
    };

    rsx! {
        Form { onsubmit: handle_submit, class: "create-todo-form",
            div { class: "create-todo-row",
                Input {
                    id: "create-todo-input",
                    name: "text",
                    autocomplete: false,
                    value: title(),
                    placeholder: "Start creating",
                    invalid: error().is_some(),
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                }
                Button { button_type: ButtonType::Submit, "Create" }
            }
            FormError { message: error() }
        }
    }
}
