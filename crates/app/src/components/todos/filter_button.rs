use dioxus::prelude::*;
use shared_types::TodoFilter;
use shared_ui::{Button, ButtonVariant};

/// One segment of the All / Active / Completed control.
#[component]
pub fn FilterButton(
    filter: TodoFilter,
    is_pressed: bool,
    on_select: EventHandler<TodoFilter>,
) -> Element {
    rsx! {
        Button {
            variant: if is_pressed { ButtonVariant::Primary } else { ButtonVariant::Secondary },
            pressed: is_pressed,
            aria_label: filter.as_str(),
            onclick: move |_| on_select.call(filter),
            "{filter}"
        }
    }
}
