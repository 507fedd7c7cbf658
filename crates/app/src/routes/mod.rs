pub mod dashboard;
pub mod not_found;

use dioxus::prelude::*;

use dashboard::DashboardOverview;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    DashboardOverview {},
    #[end_layout]
    #[redirect("/dashboard-overview", || Route::DashboardOverview {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Page shell shared by dashboard routes.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::DashboardOverview {} => "Dashboard",
        Route::NotFound { .. } => "Not Found",
    };

    rsx! {
        document::Title { "{page_title}" }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
