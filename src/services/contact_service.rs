use crate::models::{ContactMessage, ServiceError};
use crate::repositories::Repository;
use std::sync::Arc;
use tracing::info;

pub struct ContactService {
    repository: Arc<dyn Repository<ContactMessage>>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn Repository<ContactMessage>>) -> Self {
        Self { repository }
    }

    /// Stores a validated contact message and returns its id.
    pub async fn submit(&self, message: ContactMessage) -> Result<String, ServiceError> {
        let id = self.repository.create(&message).await?;

        info!(%id, "Stored contact message");
        Ok(id)
    }
}
