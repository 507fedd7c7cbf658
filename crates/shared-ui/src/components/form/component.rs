use dioxus::prelude::*;

/// Form wrapper that keeps the page from reloading on submit.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Inline error line shown under a form field.
#[component]
pub fn FormError(#[props(!optional)] message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "form-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
