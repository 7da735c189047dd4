#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use kwimport::import::ImportSession;
use kwimport::store::KeywordRecord;
use kwimport::test_support::MemoryKeywordStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Write a fixture file into the temp dir and return its path
pub fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Single-column csv with the given header and one keyword per row
pub fn keyword_csv(dir: &TempDir, name: &str, header: &str, keywords: &[&str]) -> PathBuf {
    let mut contents = format!("{}\n", header);
    for keyword in keywords {
        contents.push_str(keyword);
        contents.push('\n');
    }
    write_fixture(dir, name, contents.as_bytes())
}

/// Session over an in-memory store with the files already selected
pub fn session_with(
    store: &Arc<MemoryKeywordStore>,
    column: &str,
    files: Vec<PathBuf>,
) -> ImportSession {
    let mut session = ImportSession::new(column).with_store(store.clone());
    session.select_files(files);
    session
}

/// Fixed timestamp `minutes` past a reference point
pub fn at_minute(minutes: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, minutes, 0).unwrap()
}

pub fn record(keyword: &str, created: DateTime<Utc>, used: Option<DateTime<Utc>>) -> KeywordRecord {
    KeywordRecord {
        keyword: keyword.to_string(),
        first_created_time: created,
        last_used_time: used,
    }
}
