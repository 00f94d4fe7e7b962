use serde::Serialize;
use utoipa::ToSchema;

use super::errors::FieldError;

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"status": "...", "id": "..."}` for writes that create a document, `{"status": "..."}` otherwise.
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl StatusResponse {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id: Some(id),
        }
    }

    pub fn created(id: String) -> Self {
        Self {
            status: "created".to_string(),
            id: Some(id),
        }
    }

    pub fn updated() -> Self {
        Self {
            status: "updated".to_string(),
            id: None,
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
            id: None,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Health report returned by `GET /test`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
