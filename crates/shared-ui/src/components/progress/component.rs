use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Horizontal progress bar filled to `value` out of `max`.
#[component]
pub fn Progress(
    value: f64,
    #[props(default = 100.0)] max: f64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "progress", None, false));
    let value = value.clamp(0.0, max);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress {
            value: Some(value),
            max: max,
            attributes: attrs,
            prim::ProgressIndicator {
                attributes: vec![Attribute::new("class", "progress-indicator", None, false)],
            }
        }
    }
}
