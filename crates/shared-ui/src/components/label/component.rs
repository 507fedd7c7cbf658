use dioxus::prelude::*;

/// Text label bound to a form control; struck through when `done` is set.
#[component]
pub fn Label(
    html_for: String,
    #[props(default = false)] done: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "label", None, false),
        Attribute::new("data-done", if done { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: "{html_for}",
            ..merged,
            {children}
        }
    }
}
