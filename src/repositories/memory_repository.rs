//! In-process document store.
//!
//! Mirrors the MongoDB repository's semantics (store-assigned `ObjectId`s,
//! equality filters, `$set` updates, timestamps) so services and handlers can
//! run without a database server, e.g. in tests.

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{decode, encode, not_found, parse_id, Changes, Record, Repository, Stored};
use crate::database::StoreProbe;
use crate::models::ServiceError;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of documents currently held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl StoreProbe for MemoryStore {
    fn is_connected(&self) -> bool {
        true
    }

    async fn collection_names(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}

pub struct MemoryRepository<T> {
    store: Arc<MemoryStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn same_id(document: &Document, oid: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(id)) if id == oid)
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn create(&self, record: &T) -> Result<String, ServiceError> {
        let oid = ObjectId::new();
        let mut document = encode(record)?;
        document.insert("_id", oid);

        self.store
            .collections
            .write()
            .await
            .entry(T::COLLECTION.to_string())
            .or_default()
            .push(document);

        Ok(oid.to_hex())
    }

    async fn find(
        &self,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Stored<T>>, ServiceError> {
        // A zero limit means "no limit", as in MongoDB.
        let cap = match limit {
            Some(n) if n != 0 => n.unsigned_abs() as usize,
            _ => usize::MAX,
        };

        let collections = self.store.collections.read().await;
        let Some(documents) = collections.get(T::COLLECTION) else {
            return Ok(Vec::new());
        };

        documents
            .iter()
            .filter(|document| matches_filter(document, &filter))
            .take(cap)
            .cloned()
            .map(decode::<T>)
            .collect()
    }

    async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceError> {
        let oid = parse_id::<T>(id)?;

        let mut collections = self.store.collections.write().await;
        let document = collections
            .get_mut(T::COLLECTION)
            .and_then(|documents| documents.iter_mut().find(|d| same_id(d, &oid)))
            .ok_or_else(not_found::<T>)?;

        for (key, value) in changes.into_set_document() {
            document.insert(key, value);
        }
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let oid = parse_id::<T>(id)?;

        let mut collections = self.store.collections.write().await;
        let documents = collections
            .get_mut(T::COLLECTION)
            .ok_or_else(not_found::<T>)?;
        let position = documents
            .iter()
            .position(|d| same_id(d, &oid))
            .ok_or_else(not_found::<T>)?;

        documents.remove(position);
        Ok(1)
    }
}
