use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::intake::PropertyListing;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub store: StoreConfig,
    pub property: PropertyListing,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let store_path =
            env::var("STORE_PATH").unwrap_or_else(|_| "tenant_responses.json".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            store: StoreConfig {
                path: PathBuf::from(store_path),
            },
            property: load_property()?,
        })
    }
}

/// Listing details come from PROPERTY_* variables; values left unset stay
/// `None` and render as placeholders downstream.
fn load_property() -> Result<PropertyListing, ConfigError> {
    let monthly_rent = optional_env("PROPERTY_RENT")
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|source| ConfigError::InvalidRent { value: raw, source })
        })
        .transpose()?;

    Ok(PropertyListing {
        address: optional_env("PROPERTY_ADDRESS"),
        monthly_rent,
        bedrooms: parse_count("PROPERTY_BEDROOMS")?,
        bathrooms: parse_count("PROPERTY_BATHROOMS")?,
        available_date: optional_env("PROPERTY_AVAILABLE_DATE"),
        form_url: optional_env("PROPERTY_FORM_URL"),
    })
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_count(name: &'static str) -> Result<Option<u8>, ConfigError> {
    optional_env(name)
        .map(|raw| {
            raw.parse::<u8>()
                .map_err(|source| ConfigError::InvalidCount {
                    field: name,
                    value: raw,
                    source,
                })
        })
        .transpose()
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the JSON submission store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidRent {
        value: String,
        source: std::num::ParseFloatError,
    },
    InvalidCount {
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRent { value, .. } => {
                write!(f, "PROPERTY_RENT must be numeric, got '{value}'")
            }
            ConfigError::InvalidCount { field, value, .. } => {
                write!(f, "{field} must be a whole number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidRent { source, .. } => Some(source),
            ConfigError::InvalidCount { source, .. } => Some(source),
        }
    }
}
