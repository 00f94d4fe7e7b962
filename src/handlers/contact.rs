use actix_web::{web, HttpResponse, Result};
use utoipa;

use super::ValidatedJson;
use crate::models::{ContactForm, ContactMessage, ServiceError, StatusResponse};
use crate::services::ContactService;

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message stored", body = StatusResponse),
        (status = 422, description = "Invalid contact form", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    contact_service: web::Data<ContactService>,
    form: ValidatedJson<ContactForm>,
) -> Result<HttpResponse, ServiceError> {
    let message = ContactMessage::try_from(form.into_inner())?;

    let id = contact_service.submit(message).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::ok(id)))
}
