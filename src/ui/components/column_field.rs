use crate::ui::importer_context::ImporterContext;
use dioxus::prelude::*;

#[component]
pub fn ColumnField() -> Element {
    let ctx = use_context::<ImporterContext>();
    let ctx_for_input = ctx.clone();
    let column = ctx.session().read().column().to_string();
    let default_column = ctx.config.default_column.clone();

    rsx! {
        fieldset { class: "panel panel-row",
            legend { "Column" }
            label { r#for: "keyword-column", "Keyword column:" }
            input {
                id: "keyword-column",
                r#type: "text",
                class: "column-input",
                value: "{column}",
                oninput: move |evt| ctx_for_input.set_column(evt.value()),
            }
            span { class: "hint", "(looks for a '{default_column}' column by default)" }
        }
    }
}
