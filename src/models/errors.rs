use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Nature of a single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    InvalidType,
    OutOfRange,
    InvalidEmail,
    StringLength,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Missing, "Field required")
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {}", describe_all(.0))]
    ValidationError(Vec<FieldError>),
    #[error("Database not available: {0}")]
    StorageUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

fn describe_all(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::StorageUnavailable(_) | ServiceError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::ValidationError(errors) => {
                tracing::warn!(errors = ?errors, "Request validation failed");
                HttpResponse::UnprocessableEntity().json(json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors
                }))
            }
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::StorageUnavailable(_) | ServiceError::DatabaseError(_) => {
                tracing::error!(error = %self, "Request failed in the storage layer");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": self.to_string()
                }))
            }
        }
    }
}

impl ServiceError {
    /// The underlying message, without the variant prefix.
    pub fn cause(&self) -> String {
        match self {
            ServiceError::ValidationError(errors) => describe_all(errors),
            ServiceError::StorageUnavailable(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::DatabaseError(msg) => msg.clone(),
        }
    }
}

/// Flattens validator output into one entry per field, sorted by field name.
/// When a field breaks several rules only the first is reported.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| describe(&field, error))
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors.dedup_by(|later, earlier| later.field == earlier.field);
    field_errors
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::ValidationError(field_errors(&errors))
    }
}

fn describe(field: &str, error: &validator::ValidationError) -> FieldError {
    let kind = match error.code.as_ref() {
        "required" => ViolationKind::Missing,
        "length" => ViolationKind::StringLength,
        "range" => ViolationKind::OutOfRange,
        "email" => ViolationKind::InvalidEmail,
        _ => ViolationKind::InvalidType,
    };

    if let Some(message) = &error.message {
        return FieldError::new(field, kind, message.to_string());
    }

    let message = match kind {
        ViolationKind::Missing => "Field required".to_string(),
        ViolationKind::StringLength => length_message(&error.params),
        ViolationKind::OutOfRange => range_message(&error.params),
        ViolationKind::InvalidEmail => "Value is not a valid email address".to_string(),
        ViolationKind::InvalidType => format!("Failed validation: {}", error.code),
    };
    FieldError::new(field, kind, message)
}

fn length_message(params: &HashMap<Cow<'static, str>, serde_json::Value>) -> String {
    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => format!("String must be between {} and {} characters", min, max),
        (Some(min), None) => format!("String must have at least {} characters", min),
        (None, Some(max)) => format!("String must have at most {} characters", max),
        (None, None) => "String has an invalid length".to_string(),
    }
}

fn range_message(params: &HashMap<Cow<'static, str>, serde_json::Value>) -> String {
    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => format!("Value must be between {} and {}", min, max),
        (Some(min), None) => format!("Value must be greater than or equal to {}", min),
        (None, Some(max)) => format!("Value must be less than or equal to {}", max),
        (None, None) => "Value is out of range".to_string(),
    }
}

impl From<mongodb::error::Error> for ServiceError {
    fn from(err: mongodb::error::Error) -> Self {
        ServiceError::DatabaseError(err.to_string())
    }
}

impl From<bson::ser::Error> for ServiceError {
    fn from(err: bson::ser::Error) -> Self {
        ServiceError::DatabaseError(format!("Failed to encode document: {}", err))
    }
}

impl From<bson::de::Error> for ServiceError {
    fn from(err: bson::de::Error) -> Self {
        ServiceError::DatabaseError(format!("Failed to decode document: {}", err))
    }
}
