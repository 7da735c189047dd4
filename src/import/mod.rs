// # Import Module
//
// Keyword import workflow shared by the desktop UI and the CLI:
//
// - **ImportSession**: selected files, target column, storage handle, phase
// - **ImportPipeline**: preview, import and database view operations
// - **ProgressReporter**: log lines and percent updates for subscribers
//
// Public API:
// - `ImportPipeline`: Run operations against a session
// - `ImportProgress`: Real-time progress updates

mod pipeline;
mod progress;
mod session;
mod types;

pub use pipeline::{ImportError, ImportPipeline};
pub use progress::ProgressReporter;
pub use session::{FileSelection, ImportSession, SessionPhase};
pub use types::{
    display_name, BatchReport, DatabaseOverview, FileReport, ImportOutcome, ImportProgress,
    LogLevel,
};
