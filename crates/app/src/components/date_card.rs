use chrono::{DateTime, FixedOffset, Local};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent};

use crate::format_helpers::{format_iso_date, format_long_date};

/// Card showing today's date in the viewer's local time zone.
#[component]
pub fn DateCard() -> Element {
    let today = use_hook(|| Local::now().fixed_offset());

    rsx! {
        Card { class: "date-card",
            CardContent {
                div { class: "date-card-row",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                    FormattedDate { date: today }
                }
            }
        }
    }
}

/// Human-readable date wrapped in a `<time>` element.
#[component]
pub fn FormattedDate(date: DateTime<FixedOffset>) -> Element {
    let iso = format_iso_date(&date);
    let text = format_long_date(&date);

    rsx! {
        time { datetime: "{iso}", "{text}" }
    }
}
