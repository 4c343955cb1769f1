//! Configuration module - environment variable parsing

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Server binding address
    pub server_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Allowed client origins for CORS, comma-separated
    pub client_origin: String,

    /// Load the demo shops, accounts and stock at startup
    pub seed_demo_data: bool,
    /// Login attempts accepted per second across all clients
    pub login_rate_limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Hosting platforms provide PORT, fall back to SERVER_ADDR or default
        let server_addr = if let Some(port) = get("PORT") {
            format!("0.0.0.0:{}", port)
        } else {
            get("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string())
        };

        let seed_demo_data = match get("SEED_DEMO_DATA") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid("SEED_DEMO_DATA"))?,
            None => true,
        };

        let login_rate_limit = match get("LOGIN_RATE_LIMIT") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("LOGIN_RATE_LIMIT"))?,
            None => DEFAULT_LOGIN_RATE_LIMIT,
        };

        Ok(Self {
            server_addr: server_addr
                .parse()
                .map_err(|_| ConfigError::InvalidAddress)?,

            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            client_origin: get("CLIENT_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),

            seed_demo_data,
            login_rate_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            client_origin: "http://localhost:5173".to_string(),
            seed_demo_data: true,
            login_rate_limit: DEFAULT_LOGIN_RATE_LIMIT,
        }
    }
}

/// Login attempts per second when LOGIN_RATE_LIMIT is unset
pub const DEFAULT_LOGIN_RATE_LIMIT: u32 = 10;

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Invalid server address format")]
    InvalidAddress,
}
