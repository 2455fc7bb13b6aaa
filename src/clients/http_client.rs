use crate::config::settings::AppSettings;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;

pub fn new_api_client(app_settings: &AppSettings) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(app_settings.http.timeout_secs))
        .connect_timeout(Duration::from_secs(app_settings.http.connect_timeout_secs))
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))
}
