use crate::ui::importer_context::ImporterContextProvider;
use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::dialog::GlobalDialog;
use super::dialog_context::DialogContext;
use super::importer_page::ImporterPage;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(DialogContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ImporterContextProvider {
            ImporterPage {}
            GlobalDialog {}
        }
    }
}
