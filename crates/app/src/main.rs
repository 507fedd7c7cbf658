use dioxus::prelude::*;

mod components;
mod config;
mod format_helpers;
mod routes;
mod store;
use config::dashboard_config;
use routes::Route;
use store::TodoStore;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| dashboard_config().clone());

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            seed_examples = config.todos.seed_examples,
            "dashboard starting"
        );
    });

    // The board lives for the whole session; nothing is persisted.
    use_context_provider(|| TodoStore::new(config.todos.seed_examples));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
