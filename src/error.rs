//! Common error types for the hairstyle studio

use thiserror::Error;

/// Library-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("No image generated in response")]
    NoImageGenerated,

    #[error("API key is not configured (set API_KEY)")]
    MissingApiKey,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
