//! MongoDB connection handle shared by every repository.
//!
//! The handle is acquired once at startup. When the store cannot be reached the
//! process keeps serving in a degraded mode where every persistence call fails
//! with [`ServiceError::StorageUnavailable`].

use async_trait::async_trait;
use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::ServiceError;

const APP_NAME: &str = "axiom-site-api";

#[derive(Clone, Debug)]
pub enum DatabaseHandle {
    Connected { client: Client, database: Database },
    Unavailable { reason: String },
}

impl DatabaseHandle {
    /// Connects and pings the configured database. Never fails: any problem
    /// yields an `Unavailable` handle carrying the reason.
    pub async fn connect(config: &AppConfig) -> Self {
        let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
            warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
            return Self::unavailable("Database not configured");
        };

        match Self::try_connect(url, name, config).await {
            Ok(handle) => {
                info!("Connected to MongoDB database '{}'", name);
                handle
            }
            Err(e) => {
                warn!(error = %e, "MongoDB unreachable, running without a database");
                Self::unavailable(format!("Failed to connect to MongoDB: {}", e))
            }
        }
    }

    async fn try_connect(
        url: &str,
        name: &str,
        config: &AppConfig,
    ) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.selection_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(name);
        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self::Connected { client, database })
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn database(&self) -> Result<&Database, ServiceError> {
        match self {
            Self::Connected { database, .. } => Ok(database),
            Self::Unavailable { reason } => Err(ServiceError::StorageUnavailable(reason.clone())),
        }
    }

    /// Releases the client's pooled connections.
    pub async fn shutdown(self) {
        if let Self::Connected { client, .. } = self {
            client.shutdown().await;
            info!("MongoDB client shut down");
        }
    }
}

/// Connectivity report used by the diagnostic endpoint.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    fn is_connected(&self) -> bool;
    async fn collection_names(&self) -> Result<Vec<String>, ServiceError>;
}

#[async_trait]
impl StoreProbe for DatabaseHandle {
    fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    async fn collection_names(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.database()?.list_collection_names().await?)
    }
}
