//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "RISK_SERVER_ADDR";

/// Environment variable for the model parameter file.
pub const MODEL_PATH_VAR: &str = "RISK_MODEL_PATH";

/// Error reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("invalid RISK_SERVER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON model parameters; the built-in model is used when unset.
    pub model_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            model_path: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration using a variable lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.addr = value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }

        config.model_path = get(MODEL_PATH_VAR).map(PathBuf::from);

        Ok(config)
    }
}
