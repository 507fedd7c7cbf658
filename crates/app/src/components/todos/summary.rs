use dioxus::prelude::*;
use shared_types::LevelProgress;
use shared_ui::{Badge, Progress};

use crate::format_helpers::progress_label;

/// Level badge, XP bar and totals.
#[component]
pub fn XpSummary(progress: LevelProgress) -> Element {
    let label = progress_label(&progress);
    let level = progress.level;
    let total_xp = progress.total_xp;

    rsx! {
        div { class: "xp-summary",
            Badge { class: "xp-level", "Level {level}" }
            div { class: "xp-progress",
                Progress { value: progress.percent }
                p { class: "text-muted", "{label}" }
                p { class: "xp-total", "Total XP: {total_xp}" }
            }
        }
    }
}
