use actix_web::{test, web, App};
use serde_json::Value;
use std::sync::Arc;
use axiom_site_api::{
    config::AppConfig,
    database::{DatabaseHandle, StoreProbe},
    handlers,
    models::{ContactMessage, Project, SiteSettings},
    repositories::{MemoryRepository, MemoryStore, MongoRepository, Repository},
    services::{ContactService, DiagnosticsService, ProjectService, SettingsService},
};

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub config: AppConfig,
    contacts: Arc<dyn Repository<ContactMessage>>,
    settings: Arc<dyn Repository<SiteSettings>>,
    projects: Arc<dyn Repository<Project>>,
    probe: Arc<dyn StoreProbe>,
}

impl TestApp {
    /// App backed by the in-process document store.
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let config = AppConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("mongodb://localhost:27017".to_string()),
            "DATABASE_NAME" => Some("axiom_test".to_string()),
            _ => None,
        })
        .expect("Failed to build test config");

        Self {
            contacts: Arc::new(MemoryRepository::new(store.clone())),
            settings: Arc::new(MemoryRepository::new(store.clone())),
            projects: Arc::new(MemoryRepository::new(store.clone())),
            probe: store.clone(),
            store,
            config,
        }
    }

    /// App wired to MongoDB repositories with no reachable database.
    pub fn without_database() -> Self {
        let handle = DatabaseHandle::unavailable("Database not available");
        let config = AppConfig::from_lookup(|_| None).expect("Failed to build test config");

        Self {
            store: MemoryStore::new(),
            contacts: Arc::new(MongoRepository::new(handle.clone())),
            settings: Arc::new(MongoRepository::new(handle.clone())),
            projects: Arc::new(MongoRepository::new(handle.clone())),
            probe: Arc::new(handle),
            config,
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let contact_service = web::Data::new(ContactService::new(self.contacts.clone()));
        let settings_service = web::Data::new(SettingsService::new(self.settings.clone()));
        let project_service = web::Data::new(ProjectService::new(self.projects.clone()));
        let diagnostics_service =
            web::Data::new(DiagnosticsService::new(self.probe.clone(), &self.config));

        App::new()
            .app_data(contact_service)
            .app_data(settings_service)
            .app_data(project_service)
            .app_data(diagnostics_service)
            .wrap(handlers::cors())
            .configure(handlers::configure)
    }

    /// Creates a project through the API and returns its id.
    pub async fn add_project(&self, body: Value) -> String {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "project creation failed: {}", resp.status());

        let body: Value = test::read_body_json(resp).await;
        body["id"].as_str().expect("missing id").to_string()
    }

    pub async fn list_projects(&self, uri: &str) -> Vec<Value> {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        body.as_array().expect("expected a JSON array").clone()
    }
}
