use crate::config::Config;
use crate::import::{
    BatchReport, DatabaseOverview, ImportError, ImportPipeline, ImportProgress, ImportSession,
    LogLevel, ProgressReporter, SessionPhase,
};
use crate::store::MongoKeywordStore;
use crate::ui::components::dialog_context::{DialogContext, DialogKind};
use crate::ui::AppContext;
use chrono::{DateTime, Local};
use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::debug;

/// One line of the on-screen operation log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub time: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS] message`
    pub fn line(&self) -> String {
        format!("[{}] {}", self.time.format("%H:%M:%S"), self.message)
    }
}

/// UI state of the importer window plus the actions its buttons trigger
#[derive(Clone)]
pub struct ImporterContext {
    pub(crate) session: Signal<ImportSession>,
    pub(crate) status: Signal<String>,
    pub(crate) progress: Signal<u8>,
    pub(crate) log: Signal<Vec<LogEntry>>,
    pub(crate) preview: Signal<Option<BatchReport>>,
    pub(crate) overview: Signal<Option<DatabaseOverview>>,
    pub(crate) dialog: DialogContext,
    pub(crate) reporter: ProgressReporter,
    pub(crate) config: Config,
}

impl ImporterContext {
    pub fn new(config: Config, dialog: DialogContext, reporter: ProgressReporter) -> Self {
        Self {
            session: Signal::new(ImportSession::new(config.default_column.clone())),
            status: Signal::new("Ready".to_string()),
            progress: Signal::new(0),
            log: Signal::new(Vec::new()),
            preview: Signal::new(None),
            overview: Signal::new(None),
            dialog,
            reporter,
            config,
        }
    }

    pub fn session(&self) -> Signal<ImportSession> {
        self.session
    }

    pub fn status(&self) -> Signal<String> {
        self.status
    }

    pub fn progress(&self) -> Signal<u8> {
        self.progress
    }

    pub fn log(&self) -> Signal<Vec<LogEntry>> {
        self.log
    }

    pub fn preview(&self) -> Signal<Option<BatchReport>> {
        self.preview
    }

    pub fn overview(&self) -> Signal<Option<DatabaseOverview>> {
        self.overview
    }

    pub fn is_busy(&self) -> bool {
        self.session.read().phase().is_busy()
    }

    fn set_status(&self, status: impl Into<String>) {
        let mut signal = self.status;
        signal.set(status.into());
    }

    pub fn close_preview(&self) {
        let mut preview = self.preview;
        preview.set(None);
    }

    pub fn close_overview(&self) {
        let mut overview = self.overview;
        overview.set(None);
    }

    pub fn set_column(&self, column: String) {
        let mut session = self.session;
        session.write().set_column(column);
    }

    /// Apply one progress event to the visible state
    pub(crate) fn apply(&self, event: ImportProgress) {
        match event {
            ImportProgress::Log { level, message } => {
                let mut log = self.log;
                log.write().push(LogEntry {
                    time: Local::now(),
                    level,
                    message,
                });
            }
            ImportProgress::Progress { percent } => {
                let mut progress = self.progress;
                progress.set(percent);
            }
            ImportProgress::Complete { inserted } => {
                debug!("Import finished with {} inserted", inserted);
            }
            ImportProgress::Failed { error } => {
                debug!("Import failed: {}", error);
            }
        }
    }

    /// Open the keyword store; on failure operations needing it stay disabled
    pub fn connect(&self) {
        let ctx = self.clone();
        spawn(async move {
            match MongoKeywordStore::connect(&ctx.config).await {
                Ok(store) => {
                    let mut session = ctx.session;
                    session.write().set_store(Some(Arc::new(store)));
                    ctx.reporter.info("Database connected");
                    ctx.set_status("Database connected");
                }
                Err(e) => {
                    ctx.reporter
                        .error(format!("Database connection failed: {}", e));
                    ctx.set_status("Database connection failed");
                }
            }
        });
    }

    /// Show the native multi-file picker and add the chosen files
    pub fn pick_files(&self) {
        let ctx = self.clone();
        spawn(async move {
            let picked = AsyncFileDialog::new()
                .set_title("Select spreadsheet files")
                .add_filter("Excel files", &["xlsx", "xls", "xlsm"])
                .add_filter("WPS spreadsheets", &["et", "ett"])
                .add_filter("CSV files", &["csv", "tsv"])
                .add_filter("All files", &["*"])
                .pick_files()
                .await;

            if let Some(handles) = picked {
                let paths = handles.iter().map(|h| h.path().to_path_buf()).collect();
                ctx.add_files(paths);
            }
        });
    }

    pub fn add_files(&self, paths: Vec<PathBuf>) {
        let chosen = paths.len();
        let mut signal = self.session;
        let selected = {
            let mut session = signal.write();
            session.select_files(paths);
            session.selection().len()
        };

        self.reporter.info(format!("Selected {} files", chosen));
        self.set_status(format!("{} files selected", selected));
    }

    pub fn clear_files(&self) {
        let mut session = self.session;
        session.write().clear_files();
        self.reporter.info("Cleared file list");
        self.set_status("Ready");
    }

    fn warn_no_files(&self) {
        self.dialog.show_message(
            DialogKind::Warning,
            "No files".to_string(),
            "Please select files first".to_string(),
        );
    }

    fn error_not_connected(&self) {
        self.dialog.show_message(
            DialogKind::Error,
            "Error".to_string(),
            "Database is not connected".to_string(),
        );
    }

    /// Move the session into a busy phase and hand back a snapshot to run on
    fn begin(&self, phase: SessionPhase) -> Option<ImportSession> {
        let mut signal = self.session;
        let mut session = signal.write();
        if session.begin(phase) {
            Some(ImportSession::clone(&session))
        } else {
            None
        }
    }

    fn finish(&self) {
        let mut session = self.session;
        session.write().finish();
    }

    pub fn run_preview(&self) {
        if self.session.read().selection().is_empty() {
            self.warn_no_files();
            return;
        }
        let Some(snapshot) = self.begin(SessionPhase::Previewing) else {
            return;
        };

        let pipeline = ImportPipeline::new(self.reporter.clone());
        match pipeline.preview(&snapshot) {
            Ok(report) => {
                let mut preview = self.preview;
                preview.set(Some(report));
            }
            Err(e) => {
                self.dialog
                    .show_message(DialogKind::Error, "Error".to_string(), e.to_string());
            }
        }

        self.finish();
    }

    /// Confirm, then import the selected files
    pub fn request_import(&self) {
        let (has_files, connected) = {
            let session = self.session.read();
            (!session.selection().is_empty(), session.is_connected())
        };
        if !has_files {
            self.warn_no_files();
            return;
        }
        if !connected {
            self.error_not_connected();
            return;
        }

        let ctx = self.clone();
        self.dialog.show_with_callback(
            "Confirm import".to_string(),
            "Import the selected keywords into the database?".to_string(),
            "Import".to_string(),
            "Cancel".to_string(),
            move || ctx.run_import(),
        );
    }

    fn run_import(&self) {
        let Some(snapshot) = self.begin(SessionPhase::Importing) else {
            return;
        };
        self.set_status("Importing...");

        let ctx = self.clone();
        spawn(async move {
            let pipeline = ImportPipeline::new(ctx.reporter.clone());
            let result = pipeline.import(&snapshot).await;
            ctx.finish();

            match result {
                Ok(outcome) if outcome.inserted > 0 => {
                    ctx.set_status(format!("Import complete: {} keywords", outcome.inserted));
                    ctx.dialog.show_message(
                        DialogKind::Info,
                        "Success".to_string(),
                        format!("Imported {} keywords into the database", outcome.inserted),
                    );
                }
                Ok(_) => {
                    ctx.set_status("No new keywords");
                    ctx.dialog.show_message(
                        DialogKind::Info,
                        "Nothing to import".to_string(),
                        "No new keywords to import".to_string(),
                    );
                }
                Err(e) => {
                    ctx.set_status("Import failed");
                    ctx.dialog
                        .show_message(DialogKind::Error, "Error".to_string(), e.to_string());
                }
            }
        });
    }

    pub fn run_view_database(&self) {
        if !self.session.read().is_connected() {
            self.error_not_connected();
            return;
        }
        let Some(snapshot) = self.begin(SessionPhase::ViewingDatabase) else {
            return;
        };

        let ctx = self.clone();
        spawn(async move {
            let pipeline = ImportPipeline::new(ctx.reporter.clone());
            let result = pipeline
                .view_database(&snapshot, ctx.config.recent_limit)
                .await;
            ctx.finish();

            match result {
                Ok(overview) => {
                    let mut signal = ctx.overview;
                    signal.set(Some(overview));
                }
                Err(ImportError::NotConnected) => ctx.error_not_connected(),
                Err(e) => {
                    ctx.dialog.show_message(
                        DialogKind::Error,
                        "Error".to_string(),
                        format!("Failed to view database: {}", e),
                    );
                }
            }
        });
    }
}

/// Forward progress events from the pipeline channel into UI signals
async fn listen_for_progress(
    ctx: ImporterContext,
    mut progress_rx: tokio_mpsc::UnboundedReceiver<ImportProgress>,
) {
    while let Some(event) = progress_rx.recv().await {
        ctx.apply(event);
    }
    debug!("Progress channel closed");
}

/// Provider component to make the importer context available to the page
#[component]
pub fn ImporterContextProvider(children: Element) -> Element {
    let app_context = use_context::<AppContext>();
    let dialog = use_context::<DialogContext>();

    let importer_ctx = use_hook(move || {
        let (reporter, progress_rx) = ProgressReporter::channel();
        let ctx = ImporterContext::new(app_context.config.clone(), dialog, reporter);
        spawn(listen_for_progress(ctx.clone(), progress_rx));
        ctx.connect();
        ctx
    });

    use_context_provider(move || importer_ctx);

    rsx! {
        {children}
    }
}
