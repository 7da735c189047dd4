// # Import Pipeline
//
// read → resolve column → extract → deduplicate → diff → bulk insert
//
// Operations run inline on the caller's task. File parsing is synchronous;
// only storage calls await. Progress and log lines go through the
// `ProgressReporter` so the pipeline has no knowledge of the UI.

use crate::import::progress::ProgressReporter;
use crate::import::session::ImportSession;
use crate::import::types::{
    display_name, BatchReport, DatabaseOverview, FileReport, ImportOutcome,
};
use crate::keywords::{extract_keywords, resolve_column, KeywordBatch, MatchRule};
use crate::sheet;
use crate::store::{KeywordRecord, SharedKeywordStore, StoreError};
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Share of the progress bar spent reading files during an import
const READ_PROGRESS_SHARE: usize = 80;
/// Progress shown right before the bulk insert
const INSERT_PROGRESS: u8 = 90;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No files selected")]
    NoFilesSelected,
    #[error("Database is not connected")]
    NotConnected,
    #[error("Database query failed: {0}")]
    Store(#[source] StoreError),
    #[error("Import failed: {0}")]
    Insert(#[source] StoreError),
}

pub struct ImportPipeline {
    reporter: ProgressReporter,
}

impl ImportPipeline {
    pub fn new(reporter: ProgressReporter) -> Self {
        Self { reporter }
    }

    /// Read every file into one deduplicated batch.
    ///
    /// Unreadable files and files without columns are logged and skipped.
    /// With `track_progress`, file *i* of *n* reports `i / n * 80` percent.
    pub fn collect_batch(
        &self,
        paths: &[PathBuf],
        column: &str,
        track_progress: bool,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            if track_progress && total > 0 {
                self.reporter
                    .percent((index * READ_PROGRESS_SHARE / total) as u8);
            }

            let file_report = self.read_file(path, column, &mut report.batch);
            report.extracted += file_report.extracted;
            report.files.push(file_report);
        }

        report
    }

    fn read_file(&self, path: &Path, column: &str, batch: &mut KeywordBatch) -> FileReport {
        let name = display_name(path);
        self.reporter.info(format!("Processing file: {}", name));

        let skipped = |error: String| FileReport {
            path: path.to_path_buf(),
            column: None,
            extracted: 0,
            error: Some(error),
        };

        let table = match sheet::read_table(path) {
            Ok(table) => table,
            Err(e) => {
                self.reporter
                    .error(format!("Failed to read file {}: {}", name, e));
                return skipped(e.to_string());
            }
        };

        let found = match resolve_column(&table.headers, column) {
            Some(found) => found,
            None => {
                self.reporter
                    .warn(format!("No keyword column found in file {}", name));
                return skipped("no columns".to_string());
            }
        };

        if found.rule == MatchRule::Fallback {
            self.reporter.warn(format!(
                "Column '{}' not found, using first column: {}",
                column.trim(),
                found.name
            ));
        }

        let keywords = extract_keywords(&table, found.index);
        let extracted = keywords.len();
        batch.extend(keywords);

        self.reporter
            .info(format!("{}: found {} keywords", name, extracted));

        FileReport {
            path: path.to_path_buf(),
            column: Some(found),
            extracted,
            error: None,
        }
    }

    /// Unique keywords of the selected files, storage untouched
    pub fn preview(&self, session: &ImportSession) -> Result<BatchReport, ImportError> {
        if session.selection().is_empty() {
            return Err(ImportError::NoFilesSelected);
        }

        self.reporter.info("Previewing selected files...");
        let report = self.collect_batch(session.selection().paths(), session.column(), false);

        self.reporter.info(format!(
            "Preview complete: {} keywords, {} unique",
            report.extracted,
            report.unique()
        ));

        Ok(report)
    }

    /// Insert keywords of the selected files not already stored.
    ///
    /// The insert is one bulk call: on failure nothing is counted as
    /// imported and `ImportError::Insert` is returned.
    pub async fn import(&self, session: &ImportSession) -> Result<ImportOutcome, ImportError> {
        if session.selection().is_empty() {
            return Err(ImportError::NoFilesSelected);
        }
        let store = session.store().ok_or(ImportError::NotConnected)?;

        self.reporter.info("Starting import...");
        self.reporter.percent(0);

        let report = self.collect_batch(session.selection().paths(), session.column(), true);
        self.reporter.info(format!(
            "Deduplicated: {} -> {}",
            report.extracted,
            report.unique()
        ));

        let result = self.insert_new(store, &report).await;
        match &result {
            Ok(outcome) => self.reporter.complete(outcome.inserted),
            Err(e) => self.reporter.failed(e.to_string()),
        }
        result
    }

    async fn insert_new(
        &self,
        store: &SharedKeywordStore,
        report: &BatchReport,
    ) -> Result<ImportOutcome, ImportError> {
        let existing = store.existing_keywords().await.map_err(|e| {
            self.reporter
                .error(format!("Failed to load existing keywords: {}", e));
            ImportError::Store(e)
        })?;

        let new_keywords = report.batch.difference(&existing);

        self.reporter
            .info(format!("Database already holds {} keywords", existing.len()));
        self.reporter
            .info(format!("{} new keywords", new_keywords.len()));

        let mut outcome = ImportOutcome {
            files_read: report.files.len() - report.skipped_files(),
            files_skipped: report.skipped_files(),
            extracted: report.extracted,
            unique: report.unique(),
            existing: existing.len(),
            new: new_keywords.len(),
            inserted: 0,
        };

        if new_keywords.is_empty() {
            self.reporter.percent(100);
            self.reporter.info("No new keywords to import");
            return Ok(outcome);
        }

        self.reporter.percent(INSERT_PROGRESS);

        let created = Utc::now();
        let records: Vec<KeywordRecord> = new_keywords
            .into_iter()
            .map(|keyword| KeywordRecord::new(keyword, created))
            .collect();

        match store.insert_many(records).await {
            Ok(inserted) => {
                outcome.inserted = inserted;
                self.reporter.percent(100);
                self.reporter
                    .info(format!("Imported {} keywords", inserted));
                Ok(outcome)
            }
            Err(e) => {
                self.reporter.error(format!("Import failed: {}", e));
                Err(ImportError::Insert(e))
            }
        }
    }

    /// Usage counts plus the `limit` newest records
    pub async fn view_database(
        &self,
        session: &ImportSession,
        limit: i64,
    ) -> Result<DatabaseOverview, ImportError> {
        let store = session.store().ok_or(ImportError::NotConnected)?;

        let overview = load_overview(store, limit).await.map_err(|e| {
            self.reporter
                .error(format!("Failed to read database: {}", e));
            ImportError::Store(e)
        })?;

        self.reporter.info(format!(
            "Database stats: total {}, used {}, unused {}",
            overview.total, overview.used, overview.unused
        ));

        Ok(overview)
    }
}

async fn load_overview(
    store: &SharedKeywordStore,
    limit: i64,
) -> Result<DatabaseOverview, StoreError> {
    let total = store.count_all().await?;
    let used = store.count_used().await?;
    let recent = store.recent(limit).await?;

    Ok(DatabaseOverview {
        total,
        used,
        unused: total.saturating_sub(used),
        recent,
    })
}
