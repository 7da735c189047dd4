use crate::keywords::{ColumnMatch, KeywordBatch};
use crate::store::KeywordRecord;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Progress updates emitted while a pipeline operation runs
#[derive(Debug, Clone, PartialEq)]
pub enum ImportProgress {
    Log { level: LogLevel, message: String },
    Progress { percent: u8 },
    Complete { inserted: usize },
    Failed { error: String },
}

/// What one selected file contributed to a batch
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Column keywords were read from, None when the file was skipped
    pub column: Option<ColumnMatch>,
    /// Keywords extracted from the file, duplicates included
    pub extracted: usize,
    /// Why the file was skipped
    pub error: Option<String>,
}

impl FileReport {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    pub fn is_skipped(&self) -> bool {
        self.column.is_none()
    }
}

/// Result of reading every selected file into one batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    /// Keywords extracted across all files before deduplication
    pub extracted: usize,
    pub batch: KeywordBatch,
}

impl BatchReport {
    pub fn unique(&self) -> usize {
        self.batch.len()
    }

    pub fn skipped_files(&self) -> usize {
        self.files.iter().filter(|f| f.is_skipped()).count()
    }
}

/// Counts reported by a finished import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub files_read: usize,
    pub files_skipped: usize,
    pub extracted: usize,
    pub unique: usize,
    /// Keywords already in storage before the import
    pub existing: usize,
    /// Keywords of the batch not yet stored
    pub new: usize,
    pub inserted: usize,
}

/// Aggregate counts plus a window of the newest records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseOverview {
    pub total: u64,
    pub used: u64,
    pub unused: u64,
    pub recent: Vec<KeywordRecord>,
}

/// File name for log lines, falling back to the full path
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
