use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

/// Two-state checkbox reporting plain booleans.
///
/// The primitive keeps its own state after mount and `initially_checked`
/// only seeds it, so give list items a stable `key` when rendering them.
#[component]
pub fn Checkbox(
    initially_checked: bool,
    on_change: EventHandler<bool>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox", None, false));

    let initial = if initially_checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox {
            default_checked: initial,
            on_checked_change: move |state: CheckboxState| {
                on_change.call(matches!(state, CheckboxState::Checked));
            },
            attributes: attrs,
            CheckboxIndicator {}
        }
    }
}

#[component]
fn CheckboxIndicator() -> Element {
    rsx! {
        prim::CheckboxIndicator {
            attributes: vec![Attribute::new("class", "checkbox-indicator", None, false)],
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "14",
                height: "14",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 6L9 17l-5-5" }
            }
        }
    }
}
