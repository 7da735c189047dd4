pub mod app;
pub mod app_context;
pub mod components;
pub mod importer_context;

pub use app::*;
pub use app_context::AppContext;
pub use components::*;
pub use importer_context::{ImporterContext, ImporterContextProvider, LogEntry};
