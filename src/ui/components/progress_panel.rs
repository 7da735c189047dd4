use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

/// Progress bar (0-100) and status line
#[component]
pub fn ProgressPanel() -> Element {
    let ctx = use_context::<ImporterContext>();
    let percent = *ctx.progress().read();
    let status = ctx.status().read().clone();

    rsx! {
        div { class: "progress-row",
            span { "Progress:" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            span { class: "progress-label", "{percent}%" }
        }
        div { class: "status-row",
            span { "Status:" }
            span { class: "status-text", "{status}" }
        }
    }
}
