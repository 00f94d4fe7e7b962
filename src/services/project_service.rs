use crate::models::{Project, ProjectUpdate, ServiceError};
use crate::repositories::{Repository, Stored};
use bson::{doc, Document};
use std::sync::Arc;
use tracing::info;

pub struct ProjectService {
    repository: Arc<dyn Repository<Project>>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn Repository<Project>>) -> Self {
        Self { repository }
    }

    /// Lists projects, optionally restricted to an exact tag. A blank tag lists everything.
    pub async fn list(&self, tag: Option<&str>) -> Result<Vec<Stored<Project>>, ServiceError> {
        let filter = match tag {
            Some(tag) if !tag.is_empty() => doc! { "tag": tag },
            _ => Document::new(),
        };
        self.repository.find(filter, None).await
    }

    pub async fn create(&self, project: Project) -> Result<String, ServiceError> {
        let id = self.repository.create(&project).await?;

        info!(%id, tag = %project.tag, "Created project");
        Ok(id)
    }

    /// Applies the fields present in `update`; everything else is left untouched.
    pub async fn update(&self, id: &str, update: ProjectUpdate) -> Result<(), ServiceError> {
        let changes = update.into_changes()?;
        self.repository.update(id, changes).await?;

        info!(%id, "Updated project");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;

        info!(%id, "Deleted project");
        Ok(())
    }
}
