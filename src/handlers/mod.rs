pub mod contact;
pub mod projects;
pub mod settings;
pub mod system;
pub mod validated_json;

// Re-export all handler functions for easy importing
pub use contact::*;
pub use projects::*;
pub use settings::*;
pub use system::*;
pub use validated_json::ValidatedJson;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::models::{FieldError, ServiceError, ViolationKind};

/// Bodies that are not JSON at all are validation failures, reported in the
/// same per-field shape as constraint violations.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let field_error = FieldError::new("body", ViolationKind::InvalidType, err.to_string());
    ServiceError::ValidationError(vec![field_error]).into()
}

/// Unrestricted cross-origin access, credentials included. The site frontend
/// and admin pages are served from other origins.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Registers every API route. Services are expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(root))
        .route("/api/hello", web::get().to(hello))
        .route("/test", web::get().to(test_database))
        .route("/api/contact", web::post().to(submit_contact))
        .route("/api/admin/settings", web::get().to(get_settings))
        .route("/api/admin/settings", web::post().to(upsert_settings))
        .route("/api/admin/projects", web::get().to(list_projects))
        .route("/api/admin/projects", web::post().to(create_project))
        .route("/api/admin/projects/{id}", web::put().to(update_project))
        .route("/api/admin/projects/{id}", web::delete().to(delete_project));
}
