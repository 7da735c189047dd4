use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

#[component]
pub fn ActionBar() -> Element {
    let ctx = use_context::<ImporterContext>();
    let ctx_for_preview = ctx.clone();
    let ctx_for_import = ctx.clone();
    let ctx_for_view = ctx.clone();
    let busy = ctx.is_busy();

    rsx! {
        div { class: "actions",
            button {
                class: "btn btn-success",
                disabled: busy,
                onclick: move |_| ctx_for_preview.run_preview(),
                "Preview"
            }
            button {
                class: "btn btn-warning",
                disabled: busy,
                onclick: move |_| ctx_for_import.request_import(),
                "Import into database"
            }
            button {
                class: "btn btn-info",
                disabled: busy,
                onclick: move |_| ctx_for_view.run_view_database(),
                "View database"
            }
        }
    }
}
