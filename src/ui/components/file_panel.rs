use crate::import::display_name;
use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

/// File picker button, selected file list and clear button
#[component]
pub fn FilePanel() -> Element {
    let ctx = use_context::<ImporterContext>();
    let ctx_for_pick = ctx.clone();
    let ctx_for_clear = ctx.clone();

    let names: Vec<String> = ctx
        .session()
        .read()
        .selection()
        .paths()
        .iter()
        .map(|path| display_name(path))
        .collect();
    let busy = ctx.is_busy();

    rsx! {
        fieldset { class: "panel",
            legend { "Files" }
            button {
                class: "btn btn-primary",
                disabled: busy,
                onclick: move |_| ctx_for_pick.pick_files(),
                "Select Excel / WPS files"
            }
            if names.is_empty() {
                div { class: "file-list file-list-empty", "No files selected" }
            } else {
                ul { class: "file-list",
                    for (index, name) in names.iter().enumerate() {
                        li { key: "{index}", class: "file-item", "{name}" }
                    }
                }
            }
            button {
                class: "btn btn-danger",
                disabled: busy || names.is_empty(),
                onclick: move |_| ctx_for_clear.clear_files(),
                "Clear file list"
            }
        }
    }
}
