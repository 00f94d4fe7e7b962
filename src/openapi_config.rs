use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ContactForm, DiagnosticsResponse, ErrorResponse, FieldError, MessageResponse, Project,
    ProjectForm, ProjectUpdate, SiteSettings, StatusResponse, ViolationKind,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::hello,
        handlers::test_database,
        handlers::submit_contact,
        handlers::get_settings,
        handlers::upsert_settings,
        handlers::list_projects,
        handlers::create_project,
        handlers::update_project,
        handlers::delete_project,
    ),
    components(schemas(
        ContactForm,
        SiteSettings,
        ProjectForm,
        Project,
        ProjectUpdate,
        StatusResponse,
        MessageResponse,
        DiagnosticsResponse,
        ErrorResponse,
        FieldError,
        ViolationKind,
    )),
    tags(
        (name = "axiom", description = "Contact form, site settings and portfolio projects")
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec) -> OpenApiSpec {
    openapi.info.title = "Axiom site API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description = Some(
        "Contact form submissions, editable site settings and portfolio project CRUD. \
         The admin routes are unauthenticated."
            .to_string(),
    );

    openapi
}
