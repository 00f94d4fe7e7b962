use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;
use std::marker::PhantomData;

use super::{decode, encode, not_found, parse_id, Changes, Record, Repository, Stored};
use crate::database::DatabaseHandle;
use crate::models::ServiceError;

/// MongoDB-backed repository, one collection per record type.
pub struct MongoRepository<T> {
    handle: DatabaseHandle,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MongoRepository<T> {
    pub fn new(handle: DatabaseHandle) -> Self {
        Self {
            handle,
            _record: PhantomData,
        }
    }

    fn collection(&self) -> Result<Collection<Document>, ServiceError> {
        Ok(self.handle.database()?.collection::<Document>(T::COLLECTION))
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MongoRepository<T> {
    async fn create(&self, record: &T) -> Result<String, ServiceError> {
        let collection = self.collection()?;
        let document = encode(record)?;

        let result = collection.insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| ServiceError::DatabaseError("Failed to get inserted ID".to_string()))
    }

    async fn find(
        &self,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Stored<T>>, ServiceError> {
        let collection = self.collection()?;

        let mut query = collection.find(filter);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        let documents: Vec<Document> = query.await?.try_collect().await?;

        documents.into_iter().map(decode::<T>).collect()
    }

    async fn update(&self, id: &str, changes: Changes) -> Result<u64, ServiceError> {
        let collection = self.collection()?;
        let oid = parse_id::<T>(id)?;

        let result = collection
            .update_one(doc! { "_id": oid }, doc! { "$set": changes.into_set_document() })
            .await?;

        if result.matched_count == 0 {
            return Err(not_found::<T>());
        }
        Ok(result.matched_count)
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let collection = self.collection()?;
        let oid = parse_id::<T>(id)?;

        let result = collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(not_found::<T>());
        }
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    // Round trips against a live server are not covered here; these exercise
    // the degraded path, which needs no MongoDB instance.
    fn repository() -> MongoRepository<Project> {
        MongoRepository::new(DatabaseHandle::unavailable("Database not available"))
    }

    #[actix_rt::test]
    async fn every_operation_fails_fast_without_a_connection() {
        let repo = repository();
        let project = Project {
            title: "t".into(),
            tag: "Web".into(),
            image_url: "http://x".into(),
            description: None,
            case_study_url: None,
            featured: false,
            order: None,
        };

        assert!(matches!(
            repo.create(&project).await,
            Err(ServiceError::StorageUnavailable(_))
        ));
        assert!(matches!(
            repo.find(Document::new(), None).await,
            Err(ServiceError::StorageUnavailable(_))
        ));
        assert!(matches!(
            repo.update("not-an-id", Changes::default()).await,
            Err(ServiceError::StorageUnavailable(_))
        ));
        assert!(matches!(
            repo.delete("65f000000000000000000000").await,
            Err(ServiceError::StorageUnavailable(_))
        ));
    }
}
