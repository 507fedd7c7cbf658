use dioxus::prelude::*;
use shared_types::ProfileConfig;
use shared_ui::{Card, CardContent, UserAvatar};

use crate::format_helpers::greeting_line;

/// Greeting and avatar for the configured profile.
#[component]
pub fn ProfileCard(profile: ProfileConfig) -> Element {
    let headline = greeting_line(&profile.greeting, &profile.name);
    let initials = profile.initials();

    rsx! {
        Card { class: "profile-card",
            CardContent {
                div { class: "profile-card-row",
                    ProfileGreeting { headline }
                    UserAvatar { src: profile.avatar_url.clone(), initials }
                }
            }
        }
    }
}

#[component]
fn ProfileGreeting(headline: String) -> Element {
    rsx! {
        div {
            h2 { class: "profile-greeting", "{headline}" }
            p { class: "text-muted", "Welcome back to your dashboard." }
        }
    }
}
