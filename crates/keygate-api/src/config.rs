use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid bind address {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub user_pool_id: String,
    /// Overrides the region from the AWS default chain.
    pub region: Option<String>,
    pub bind_addr: SocketAddr,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda_runtime: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let client_id = get("COGNITO_CLIENT_ID").ok_or(ConfigError::Missing("COGNITO_CLIENT_ID"))?;
        let user_pool_id =
            get("COGNITO_USERPOOL_ID").ok_or(ConfigError::Missing("COGNITO_USERPOOL_ID"))?;

        let raw_addr = get("KEYGATE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client_id,
            user_pool_id,
            region: get("AWS_REGION"),
            bind_addr,
            lambda_runtime: get("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
