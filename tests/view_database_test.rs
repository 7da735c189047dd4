#![cfg(feature = "test-utils")]

mod support;

use kwimport::import::{ImportError, ImportPipeline, ImportSession, ProgressReporter};
use kwimport::test_support::MemoryKeywordStore;
use std::sync::Arc;
use support::{at_minute, record, tracing_init};

fn seeded_store() -> Arc<MemoryKeywordStore> {
    Arc::new(MemoryKeywordStore::with_records(vec![
        record("oldest", at_minute(1), Some(at_minute(30))),
        record("middle", at_minute(10), None),
        record("newest", at_minute(20), Some(at_minute(40))),
        record("later", at_minute(15), None),
    ]))
}

#[tokio::test]
async fn test_counts_split_by_usage() {
    tracing_init();
    let store = seeded_store();
    let session = ImportSession::new("kw").with_store(store.clone());

    let overview = ImportPipeline::new(ProgressReporter::silent())
        .view_database(&session, 200)
        .await
        .unwrap();

    assert_eq!(overview.total, 4);
    assert_eq!(overview.used, 2);
    assert_eq!(overview.unused, 2);
    assert_eq!(overview.used + overview.unused, overview.total);
}

#[tokio::test]
async fn test_recent_is_newest_first() {
    tracing_init();
    let store = seeded_store();
    let session = ImportSession::new("kw").with_store(store.clone());

    let overview = ImportPipeline::new(ProgressReporter::silent())
        .view_database(&session, 200)
        .await
        .unwrap();

    let keywords: Vec<&str> = overview.recent.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["newest", "later", "middle", "oldest"]);
    assert!(overview.recent[0].is_used());
    assert!(!overview.recent[1].is_used());
}

#[tokio::test]
async fn test_recent_respects_limit() {
    tracing_init();
    let store = seeded_store();
    let session = ImportSession::new("kw").with_store(store.clone());

    let overview = ImportPipeline::new(ProgressReporter::silent())
        .view_database(&session, 2)
        .await
        .unwrap();

    assert_eq!(overview.recent.len(), 2);
    // Counts cover the whole collection, not just the listed window
    assert_eq!(overview.total, 4);
}

#[tokio::test]
async fn test_empty_store() {
    tracing_init();
    let store = Arc::new(MemoryKeywordStore::new());
    let session = ImportSession::new("kw").with_store(store.clone());

    let overview = ImportPipeline::new(ProgressReporter::silent())
        .view_database(&session, 200)
        .await
        .unwrap();

    assert_eq!(overview.total, 0);
    assert_eq!(overview.unused, 0);
    assert!(overview.recent.is_empty());
}

#[tokio::test]
async fn test_requires_connection() {
    tracing_init();
    let session = ImportSession::new("kw");

    let result = ImportPipeline::new(ProgressReporter::silent())
        .view_database(&session, 200)
        .await;

    assert!(matches!(result, Err(ImportError::NotConnected)));
}
