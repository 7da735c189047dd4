mod mongo;

pub use mongo::MongoKeywordStore;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Invalid keyword document: {0}")]
    InvalidDocument(String),
    #[error("Insert failed: {0}")]
    Insert(String),
}

/// One stored keyword with its creation and usage timestamps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub first_created_time: DateTime<Utc>,
    /// Set by the consumer that hands keywords out, never by this tool
    pub last_used_time: Option<DateTime<Utc>>,
}

impl KeywordRecord {
    /// A freshly imported, never used keyword
    pub fn new(keyword: String, created: DateTime<Utc>) -> Self {
        Self {
            keyword,
            first_created_time: created,
            last_used_time: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.last_used_time.is_some()
    }
}

/// Trait for keyword storage operations (allows mocking for tests)
#[async_trait::async_trait]
pub trait KeywordStore: Send + Sync {
    /// Number of stored records
    async fn count_all(&self) -> Result<u64, StoreError>;

    /// Number of records with `last_used_time` set
    async fn count_used(&self) -> Result<u64, StoreError>;

    /// Every stored keyword value
    async fn existing_keywords(&self) -> Result<HashSet<String>, StoreError>;

    /// Insert all records in one bulk call, returning how many were inserted.
    /// Either every record is reported inserted or the call fails.
    async fn insert_many(&self, records: Vec<KeywordRecord>) -> Result<usize, StoreError>;

    /// Most recently created records, newest first
    async fn recent(&self, limit: i64) -> Result<Vec<KeywordRecord>, StoreError>;
}

pub type SharedKeywordStore = Arc<dyn KeywordStore>;
