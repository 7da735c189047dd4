use crate::store::KeywordRecord;
use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

fn usage_mark(record: &KeywordRecord) -> &'static str {
    if record.is_used() {
        "✅"
    } else {
        "⭕"
    }
}

/// Usage counts and the most recently created keywords
#[component]
pub fn DatabaseModal() -> Element {
    let ctx = use_context::<ImporterContext>();
    let ctx_for_close = ctx.clone();
    let ctx_for_overlay = ctx.clone();

    let Some(overview) = ctx.overview().read().clone() else {
        return rsx! {};
    };
    let rows: Vec<(String, String)> = overview
        .recent
        .iter()
        .map(|record| {
            (
                format!("{} {}", usage_mark(record), record.keyword),
                record
                    .first_created_time
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            )
        })
        .collect();

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| ctx_for_overlay.close_overview(),
            div {
                class: "modal modal-wide",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "Database" }
                div { class: "stats",
                    span { "Total keywords: {overview.total}" }
                    span { "Used: {overview.used}" }
                    span { "Unused: {overview.unused}" }
                }
                ul { class: "modal-list",
                    for (index, (line, created)) in rows.iter().enumerate() {
                        li { key: "{index}", title: "{created}", "{line}" }
                    }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| ctx_for_close.close_overview(),
                        "Close"
                    }
                }
            }
        }
    }
}
