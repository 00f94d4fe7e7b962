use actix_web::{web, HttpResponse, Result};
use utoipa;

use super::ValidatedJson;
use crate::models::{
    Project, ProjectForm, ProjectQuery, ProjectUpdate, ServiceError, StatusResponse,
};
use crate::services::ProjectService;

#[utoipa::path(
    get,
    path = "/api/admin/projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Projects with `_id` and timestamps", body = [Project]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_projects(
    project_service: web::Data<ProjectService>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, ServiceError> {
    let projects = project_service.list(query.tag.as_deref()).await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Project created", body = StatusResponse),
        (status = 422, description = "Invalid project", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_project(
    project_service: web::Data<ProjectService>,
    form: ValidatedJson<ProjectForm>,
) -> Result<HttpResponse, ServiceError> {
    let project = Project::try_from(form.into_inner())?;

    let id = project_service.create(project).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::created(id)))
}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Project updated", body = StatusResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Invalid update", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_project(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
    form: ValidatedJson<ProjectUpdate>,
) -> Result<HttpResponse, ServiceError> {
    let project_id = path.into_inner();

    project_service
        .update(&project_id, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(StatusResponse::updated()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted", body = StatusResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_project(
    project_service: web::Data<ProjectService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let project_id = path.into_inner();

    project_service.delete(&project_id).await?;

    Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
