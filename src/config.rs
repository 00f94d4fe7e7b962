use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string. `None` runs the API without a database.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub bind_address: SocketAddr,
    pub connect_timeout: Duration,
    pub selection_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Blank
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(format!("{}:{}", host, port)))?;

        let connect_timeout = parse_or(
            "DATABASE_CONNECT_TIMEOUT_SECS",
            get("DATABASE_CONNECT_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let selection_timeout = parse_or(
            "DATABASE_SELECTION_TIMEOUT_SECS",
            get("DATABASE_SELECTION_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME"),
            bind_address,
            connect_timeout: Duration::from_secs(connect_timeout),
            selection_timeout: Duration::from_secs(selection_timeout),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
