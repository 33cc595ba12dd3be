mod parser;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub use parser::{load_config, ConfigError};

/// Main configuration structure for the service, loaded once at startup
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Connection pool settings
    pub database: DatabaseConfig,
    /// Remote function called by the `/say` endpoint
    pub remote: RemoteConfig,
}

/// HTTP listener settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Connection pool settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path or URL
    pub url: String,
    /// Maximum number of connections checked out at once
    pub pool_size: u32,
    /// How long a checkout waits for a free connection
    #[serde(deserialize_with = "deserialize_duration")]
    pub connection_timeout: Duration,
    /// How long SQLite waits on a locked database before failing a statement
    #[serde(deserialize_with = "deserialize_duration")]
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: "students.db".to_string(),
            pool_size: 10,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Remote function settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    /// Absolute URL of the remote function; `keyword` is appended to its query
    pub function_url: String,
    /// Optional request timeout, the HTTP client default applies when unset
    #[serde(deserialize_with = "deserialize_optional_duration")]
    pub timeout: Option<Duration>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            function_url: "http://localhost:7071/api/say".to_string(),
            timeout: None,
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_optional_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => humantime::parse_duration(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
