use super::action_bar::ActionBar;
use super::column_field::ColumnField;
use super::database_modal::DatabaseModal;
use super::file_panel::FilePanel;
use super::log_pane::LogPane;
use super::preview_modal::PreviewModal;
use super::progress_panel::ProgressPanel;
use dioxus::prelude::*;

/// The single importer window
#[component]
pub fn ImporterPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Keyword Importer" }
            FilePanel {}
            ColumnField {}
            ActionBar {}
            ProgressPanel {}
            LogPane {}
        }
        PreviewModal {}
        DatabaseModal {}
    }
}
