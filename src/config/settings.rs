use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub server: ServerConfig,
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, AppError> {
        // Effect server location; the controller runs on the Flask default port
        let base_url = env::var("LEDSTRIP_SERVER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err(AppError::Configuration(
                "LEDSTRIP_SERVER_URL must not be empty".to_string(),
            ));
        }

        // HTTP client timeouts
        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|_| {
                AppError::Configuration("HTTP_TIMEOUT_SECS must be a valid number".to_string())
            })?;

        let connect_timeout_secs = env::var("HTTP_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| {
                AppError::Configuration(
                    "HTTP_CONNECT_TIMEOUT_SECS must be a valid number".to_string(),
                )
            })?;

        Ok(Self {
            server: ServerConfig { base_url },
            http: HttpConfig {
                timeout_secs,
                connect_timeout_secs,
            },
        })
    }
}
