use bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::errors::ServiceError;
use super::require;
use crate::repositories::{Changes, Record};

/// Payload for creating a portfolio project.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct ProjectForm {
    #[validate(required)]
    pub title: Option<String>,
    /// Category label such as Web, AI, Mobile or Branding.
    #[validate(required)]
    pub tag: Option<String>,
    /// Cover image URL.
    #[validate(required)]
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub case_study_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[validate(range(min = 0))]
    pub order: Option<i64>,
}

/// Stored portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub tag: String,
    pub image_url: String,
    pub description: Option<String>,
    pub case_study_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub order: Option<i64>,
}

impl Record for Project {
    const COLLECTION: &'static str = "project";
    const LABEL: &'static str = "Project";
}

impl TryFrom<ProjectForm> for Project {
    type Error = ServiceError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            title: require("title", form.title)?,
            tag: require("tag", form.tag)?,
            image_url: require("image_url", form.image_url)?,
            description: form.description,
            case_study_url: form.case_study_url,
            featured: form.featured,
            order: form.order,
        })
    }
}

/// Partial project update. Absent and null fields leave the stored value alone.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub tag: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub case_study_url: Option<String>,
    pub featured: Option<bool>,
    #[validate(range(min = 0))]
    pub order: Option<i64>,
}

impl ProjectUpdate {
    /// Validates the update and keeps only the fields that were set.
    pub fn into_changes(self) -> Result<Changes, ServiceError> {
        self.validate()?;
        let fields: Document = bson::to_document(&self)?;
        Ok(Changes::present_only(fields))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    /// Exact tag to filter on. Empty means no filter.
    pub tag: Option<String>,
}
