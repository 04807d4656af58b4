use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG: &str = "info";
const DEFAULT_TOPIC: &str = "time-entries.v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },

    #[error("{key} must be a port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must not be blank")]
    Blank { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
    pub outbox_topic: String,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `TIMESHEETS_*` from the process environment, honouring a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Blank { key }),
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        let host = read("TIMESHEETS_HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.parse().map_err(|_| ConfigError::InvalidHost {
            key: "TIMESHEETS_HOST",
            value: host.clone(),
        })?;

        let port = match read("TIMESHEETS_PORT")? {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort {
                key: "TIMESHEETS_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            log_filter: read("TIMESHEETS_LOG")?.unwrap_or_else(|| DEFAULT_LOG.to_string()),
            outbox_topic: read("TIMESHEETS_OUTBOX_TOPIC")?
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            seed_path: read("TIMESHEETS_SEED_PATH")?.map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
