// Test support utilities for both unit and integration tests

use crate::store::{KeywordRecord, KeywordStore, StoreError};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory keyword store for testing
///
/// Keeps records in insertion order instead of talking to MongoDB.
/// Inserts can be made to fail to exercise the all-or-nothing import path.
#[derive(Default)]
pub struct MemoryKeywordStore {
    records: Mutex<Vec<KeywordRecord>>,
    fail_inserts: AtomicBool,
    insert_calls: AtomicUsize,
}

impl MemoryKeywordStore {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with records
    #[allow(unused)]
    pub fn with_records(records: Vec<KeywordRecord>) -> Self {
        let store = Self::default();
        *store.records.lock().unwrap() = records;
        store
    }

    /// Make every following `insert_many` call fail
    #[allow(unused)]
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Number of `insert_many` calls seen, successful or not
    #[allow(unused)]
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of everything stored
    #[allow(unused)]
    pub fn records(&self) -> Vec<KeywordRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl KeywordStore for MemoryKeywordStore {
    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }

    async fn count_used(&self) -> Result<u64, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_used())
            .count() as u64)
    }

    async fn existing_keywords(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.keyword.clone())
            .collect())
    }

    async fn insert_many(&self, records: Vec<KeywordRecord>) -> Result<usize, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Insert(format!(
                "simulated failure inserting {} records",
                records.len()
            )));
        }

        let inserted = records.len();
        self.records.lock().unwrap().extend(records);
        Ok(inserted)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<KeywordRecord>, StoreError> {
        let mut records = self.records.lock().unwrap().clone();
        // Stable sort keeps later inserts first among equal timestamps
        records.reverse();
        records.sort_by(|a, b| b.first_created_time.cmp(&a.first_created_time));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }
}
