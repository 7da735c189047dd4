pub mod action_bar;
pub mod app;
pub mod column_field;
pub mod database_modal;
pub mod dialog;
pub mod dialog_context;
pub mod file_panel;
pub mod importer_page;
pub mod log_pane;
pub mod preview_modal;
pub mod progress_panel;

pub use app::App;
pub use dialog::GlobalDialog;
pub use dialog_context::{DialogContext, DialogKind};
pub use importer_page::ImporterPage;
