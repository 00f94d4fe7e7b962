use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use axiom_site_api::config::AppConfig;
use axiom_site_api::database::DatabaseHandle;
use axiom_site_api::handlers;
use axiom_site_api::models::{ContactMessage, Project, SiteSettings};
use axiom_site_api::openapi_config::{configure_openapi, ApiDoc};
use axiom_site_api::repositories::MongoRepository;
use axiom_site_api::services::{
    ContactService, DiagnosticsService, ProjectService, SettingsService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Degrades to an unavailable handle instead of refusing to start
    let database = DatabaseHandle::connect(&config).await;

    // Initialize repositories and services with dependency injection
    let contact_service = web::Data::new(ContactService::new(Arc::new(
        MongoRepository::<ContactMessage>::new(database.clone()),
    )));
    let settings_service = web::Data::new(SettingsService::new(Arc::new(
        MongoRepository::<SiteSettings>::new(database.clone()),
    )));
    let project_service = web::Data::new(ProjectService::new(Arc::new(
        MongoRepository::<Project>::new(database.clone()),
    )));
    let diagnostics_service = web::Data::new(DiagnosticsService::new(
        Arc::new(database.clone()),
        &config,
    ));

    let openapi_spec = configure_openapi(ApiDoc::openapi());

    info!("Axiom site API listening on http://{}", config.bind_address);
    info!("API documentation: http://{}/swagger-ui/", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(contact_service.clone())
            .app_data(settings_service.clone())
            .app_data(project_service.clone())
            .app_data(diagnostics_service.clone())
            .wrap(handlers::cors())
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .configure(handlers::configure)
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    database.shutdown().await;
    Ok(())
}
