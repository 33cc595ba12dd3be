use super::AppConfig;
use std::fs;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Errors raised while assembling the startup configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Loads the service configuration
///
/// Built-in defaults are overlaid with the optional YAML file, then with
/// environment variables.
///
/// # Arguments
///
/// * `file_path` - Optional path to a YAML configuration file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into an AppConfig
/// * An environment override or the final configuration is invalid
pub fn load_config(file_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut config = match file_path {
        Some(path) => {
            let yaml_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?;
            let parsed = parse_config(&yaml_str)?;
            info!("Loaded configuration from {}", path);
            parsed
        }
        None => AppConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Parses a YAML document into an AppConfig, missing sections keep their defaults
pub fn parse_config(yaml_str: &str) -> Result<AppConfig, ConfigError> {
    if yaml_str.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(yaml_str)?)
}

impl AppConfig {
    /// Overlays values found through `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("STUDENTS_API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("STUDENTS_API_PORT") {
            self.server.port = parse_number("STUDENTS_API_PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(size) = lookup("DATABASE_POOL_SIZE") {
            self.database.pool_size = parse_number("DATABASE_POOL_SIZE", &size)?;
        }
        if let Some(timeout) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout =
                parse_duration("DATABASE_CONNECTION_TIMEOUT", &timeout)?;
        }
        if let Some(timeout) = lookup("DATABASE_BUSY_TIMEOUT") {
            self.database.busy_timeout = parse_duration("DATABASE_BUSY_TIMEOUT", &timeout)?;
        }
        if let Some(url) = lookup("REMOTE_FUNCTION_URL") {
            self.remote.function_url = url;
        }
        if let Some(timeout) = lookup("REMOTE_FUNCTION_TIMEOUT") {
            self.remote.timeout = Some(parse_duration("REMOTE_FUNCTION_TIMEOUT", &timeout)?);
        }
        Ok(())
    }

    /// Rejects configurations the service cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "database.pool_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let url = Url::parse(&self.remote.function_url).map_err(|e| ConfigError::InvalidValue {
            key: "remote.function_url".to_string(),
            message: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                key: "remote.function_url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn parse_duration(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
