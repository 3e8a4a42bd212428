use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend API error: {0}")]
    BackendApi(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid granularity: {0} (expected 'day' or 'minute')")]
    InvalidGranularity(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
