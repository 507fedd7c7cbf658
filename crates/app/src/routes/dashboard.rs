use dioxus::prelude::*;
use shared_types::DashboardConfig;

use crate::components::{DateCard, ProfileCard, TodosCard};

/// Dashboard overview: profile greeting, today's date and the to-do card.
#[component]
pub fn DashboardOverview() -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            ProfileCard { profile: config.profile.clone() }
            DateCard {}
            TodosCard {}
        }
    }
}
