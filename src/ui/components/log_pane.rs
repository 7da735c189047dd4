use crate::import::LogLevel;
use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "log-line",
        LogLevel::Warn => "log-line log-warn",
        LogLevel::Error => "log-line log-error",
    }
}

/// Scrolling operation log, newest line at the bottom
#[component]
pub fn LogPane() -> Element {
    let ctx = use_context::<ImporterContext>();
    let entries = ctx.log().read().clone();

    rsx! {
        fieldset { class: "panel log-panel",
            legend { "Log" }
            // column-reverse keeps the view pinned to the newest line
            div { class: "log-scroll",
                div {
                    for (index, entry) in entries.iter().enumerate() {
                        div { key: "{index}", class: level_class(entry.level), "{entry.line()}" }
                    }
                }
            }
        }
    }
}
