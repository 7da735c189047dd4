use super::{KeywordRecord, KeywordStore, StoreError};
use crate::config::Config;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Wire shape of a keyword document in the collection
#[derive(Debug, Serialize, Deserialize)]
struct KeywordDocument {
    keyword: String,
    first_created_time: BsonDateTime,
    last_used_time: Option<BsonDateTime>,
}

impl From<&KeywordRecord> for KeywordDocument {
    fn from(record: &KeywordRecord) -> Self {
        Self {
            keyword: record.keyword.clone(),
            first_created_time: to_bson_time(record.first_created_time),
            last_used_time: record.last_used_time.map(to_bson_time),
        }
    }
}

/// Record from a raw collection document.
///
/// Documents written by other clients may carry a non-string keyword or
/// missing timestamps; those come back as `InvalidDocument`.
fn record_from_document(document: &Document) -> Result<KeywordRecord, StoreError> {
    let keyword = document
        .get_str("keyword")
        .map_err(|e| StoreError::InvalidDocument(format!("keyword: {}", e)))?;
    let created = document
        .get_datetime("first_created_time")
        .map_err(|e| StoreError::InvalidDocument(format!("first_created_time: {}", e)))?;
    // Absent and null both mean never used
    let last_used_time = match document.get("last_used_time") {
        Some(Bson::DateTime(time)) => Some(from_bson_time(*time)?),
        Some(Bson::Null) | None => None,
        Some(other) => {
            return Err(StoreError::InvalidDocument(format!(
                "last_used_time: unexpected {:?}",
                other.element_type()
            )))
        }
    };

    Ok(KeywordRecord {
        keyword: keyword.to_string(),
        first_created_time: from_bson_time(*created)?,
        last_used_time,
    })
}

fn to_bson_time(time: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(time.timestamp_millis())
}

fn from_bson_time(time: BsonDateTime) -> Result<DateTime<Utc>, StoreError> {
    DateTime::<Utc>::from_timestamp_millis(time.timestamp_millis()).ok_or_else(|| {
        StoreError::InvalidDocument(format!("timestamp out of range: {}", time))
    })
}

/// Keyword store backed by a MongoDB collection
#[derive(Clone)]
pub struct MongoKeywordStore {
    collection: Collection<KeywordDocument>,
}

impl MongoKeywordStore {
    /// Open the configured collection and ping the server so an unreachable
    /// database is reported here rather than on first use
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        info!(
            "Connecting to {} (database '{}', collection '{}')",
            config.mongodb_url, config.database, config.collection
        );

        let client = Client::with_uri_str(&config.mongodb_url).await?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }
}

#[async_trait::async_trait]
impl KeywordStore for MongoKeywordStore {
    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn count_used(&self) -> Result<u64, StoreError> {
        Ok(self
            .collection
            .count_documents(doc! { "last_used_time": { "$ne": null } })
            .await?)
    }

    async fn existing_keywords(&self) -> Result<HashSet<String>, StoreError> {
        let mut cursor = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .projection(doc! { "keyword": 1, "_id": 0 })
            .await?;

        let mut keywords = HashSet::new();
        while let Some(document) = cursor.try_next().await? {
            match document.get_str("keyword") {
                Ok(keyword) => {
                    keywords.insert(keyword.to_string());
                }
                Err(e) => debug!("Skipping document without string keyword: {}", e),
            }
        }

        Ok(keywords)
    }

    async fn insert_many(&self, records: Vec<KeywordRecord>) -> Result<usize, StoreError> {
        // insert_many rejects an empty batch
        if records.is_empty() {
            return Ok(0);
        }

        let documents: Vec<KeywordDocument> = records.iter().map(KeywordDocument::from).collect();
        let result = self
            .collection
            .insert_many(documents)
            .await
            .map_err(|e| StoreError::Insert(e.to_string()))?;

        Ok(result.inserted_ids.len())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<KeywordRecord>, StoreError> {
        let mut cursor = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .sort(doc! { "first_created_time": -1 })
            .limit(limit)
            .await?;

        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            match record_from_document(&document) {
                Ok(record) => records.push(record),
                Err(e) => debug!("Skipping malformed keyword document: {}", e),
            }
        }

        Ok(records)
    }
}
