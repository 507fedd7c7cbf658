use dioxus::prelude::*;

/// Controlled text field.
///
/// `invalid` marks the field with `aria-invalid` so the error style and
/// screen readers pick it up alongside a `FormError`.
#[component]
pub fn Input(
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] name: String,
    #[props(default = true)] autocomplete: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "input", None, false));
    if invalid {
        attrs.push(Attribute::new("aria-invalid", "true", None, false));
    }
    let autocomplete = if autocomplete { "on" } else { "off" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "text",
            name: "{name}",
            autocomplete: autocomplete,
            value: value,
            placeholder: placeholder,
            oninput: move |evt| on_input.call(evt),
            ..attrs,
        }
    }
}
