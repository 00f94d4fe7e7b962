pub mod memory_repository;
pub mod mongo_repository;

pub use memory_repository::*;
pub use mongo_repository::*;

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::ServiceError;

/// A record type persisted in its own collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    const COLLECTION: &'static str;
    /// Human-readable name used in not-found messages.
    const LABEL: &'static str;
}

/// A record as read back from the store, with its identifier and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Field assignments applied by [`Repository::update`].
#[derive(Debug, Clone, Default)]
pub struct Changes(Document);

impl Changes {
    /// Keeps only the non-null fields.
    pub fn present_only(fields: Document) -> Self {
        Self(
            fields
                .into_iter()
                .filter(|(_, value)| !matches!(value, Bson::Null))
                .collect(),
        )
    }

    /// Writes every field, nulls included.
    pub fn all(fields: Document) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Document {
        &self.0
    }

    /// The `$set` body: the requested fields plus a fresh `updated_at`.
    /// `_id` and `created_at` are immutable and never overwritten.
    pub(crate) fn into_set_document(self) -> Document {
        let mut set = self.0;
        set.remove("_id");
        set.remove("created_at");
        set.insert("updated_at", bson::DateTime::now());
        set
    }
}

/// Persistence gateway for one record type.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Inserts one document and returns its identifier.
    async fn create(&self, record: &T) -> Result<String, ServiceError>;
    /// Returns documents matching an equality filter; an empty filter matches all.
    async fn find(&self, filter: Document, limit: Option<i64>)
        -> Result<Vec<Stored<T>>, ServiceError>;
    /// Applies `changes` to the document with `id`, returning the matched count.
    async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceError>;
    /// Removes the document with `id`, returning the deleted count.
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

pub(crate) fn parse_id<T: Record>(id: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(id).map_err(|_| not_found::<T>())
}

pub(crate) fn not_found<T: Record>() -> ServiceError {
    ServiceError::NotFound(format!("{} not found", T::LABEL))
}

/// Serializes a new record and stamps its creation timestamps.
pub(crate) fn encode<T: Record>(record: &T) -> Result<Document, ServiceError> {
    let mut document = bson::to_document(record)?;
    let now = bson::DateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);
    Ok(document)
}

/// Splits a raw document into its identifier, timestamps and typed record.
pub(crate) fn decode<T: Record>(mut document: Document) -> Result<Stored<T>, ServiceError> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(other) => {
            return Err(ServiceError::DatabaseError(format!(
                "Unsupported identifier type in {}: {:?}",
                T::COLLECTION,
                other.element_type()
            )))
        }
        None => {
            return Err(ServiceError::DatabaseError(format!(
                "Document without identifier in {}",
                T::COLLECTION
            )))
        }
    };
    let created_at = take_timestamp(&mut document, "created_at");
    let updated_at = take_timestamp(&mut document, "updated_at");
    let record = bson::from_document(document)?;

    Ok(Stored {
        id,
        record,
        created_at,
        updated_at,
    })
}

fn take_timestamp(document: &mut Document, key: &str) -> Option<DateTime<Utc>> {
    match document.remove(key) {
        Some(Bson::DateTime(timestamp)) => Some(timestamp.to_chrono()),
        _ => None,
    }
}
