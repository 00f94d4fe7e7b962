use actix_web::{web, HttpResponse};
use utoipa;

use crate::models::MessageResponse;
use crate::services::DiagnosticsService;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness message", body = MessageResponse)
    )
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the Axiom backend!"))
}

#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Static greeting", body = MessageResponse)
    )
)]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the backend API!"))
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Backend and database status; always succeeds", body = DiagnosticsResponse)
    )
)]
pub async fn test_database(diagnostics: web::Data<DiagnosticsService>) -> HttpResponse {
    HttpResponse::Ok().json(diagnostics.report().await)
}
