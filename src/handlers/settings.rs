use actix_web::{web, HttpResponse, Result};
use utoipa;

use super::ValidatedJson;
use crate::models::{ServiceError, SiteSettings, StatusResponse};
use crate::services::{SettingsService, SettingsWrite};

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses(
        (status = 200, description = "Current site settings with `_id` and timestamps", body = SiteSettings),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_settings(
    settings_service: web::Data<SettingsService>,
) -> Result<HttpResponse, ServiceError> {
    let settings = settings_service.get_or_create().await?;

    Ok(HttpResponse::Ok().json(settings))
}

#[utoipa::path(
    post,
    path = "/api/admin/settings",
    request_body = SiteSettings,
    responses(
        (status = 200, description = "Settings created or updated", body = StatusResponse),
        (status = 422, description = "Invalid settings", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn upsert_settings(
    settings_service: web::Data<SettingsService>,
    form: ValidatedJson<SiteSettings>,
) -> Result<HttpResponse, ServiceError> {
    let response = match settings_service.upsert(form.into_inner()).await? {
        SettingsWrite::Created(id) => StatusResponse::created(id),
        SettingsWrite::Updated => StatusResponse::updated(),
    };

    Ok(HttpResponse::Ok().json(response))
}
