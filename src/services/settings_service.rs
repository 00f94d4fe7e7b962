use crate::models::{ServiceError, SiteSettings};
use crate::repositories::{Changes, Repository, Stored};
use bson::Document;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Outcome of writing the settings singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsWrite {
    Created(String),
    Updated,
}

pub struct SettingsService {
    repository: Arc<dyn Repository<SiteSettings>>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn Repository<SiteSettings>>) -> Self {
        Self { repository }
    }

    async fn current(&self) -> Result<Option<Stored<SiteSettings>>, ServiceError> {
        Ok(self
            .repository
            .find(Document::new(), Some(1))
            .await?
            .into_iter()
            .next())
    }

    /// Returns the settings document, creating it with defaults on first access.
    pub async fn get_or_create(&self) -> Result<Stored<SiteSettings>, ServiceError> {
        if let Some(existing) = self.current().await? {
            return Ok(existing);
        }

        let id = self.repository.create(&SiteSettings::default()).await?;
        info!(%id, "Created default site settings");

        self.current().await?.ok_or_else(|| {
            ServiceError::DatabaseError("Site settings missing right after creation".to_string())
        })
    }

    /// Replaces every settings field, creating the document if none exists.
    pub async fn upsert(&self, settings: SiteSettings) -> Result<SettingsWrite, ServiceError> {
        settings.validate()?;

        match self.current().await? {
            Some(existing) => {
                let fields = bson::to_document(&settings)?;
                self.repository
                    .update(&existing.id, Changes::all(fields))
                    .await?;
                info!(id = %existing.id, "Updated site settings");
                Ok(SettingsWrite::Updated)
            }
            None => {
                let id = self.repository.create(&settings).await?;
                info!(%id, "Created site settings");
                Ok(SettingsWrite::Created(id))
            }
        }
    }
}
