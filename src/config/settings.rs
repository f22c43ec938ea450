//! Application settings and configuration management

use crate::catalog::Gender;
use crate::error::{AppError, Result};
use crate::i18n::Language;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Variable holding the image service credential
pub const API_KEY_ENV: &str = "API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Image service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Client timeout; unset means the HTTP library default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: None,
        }
    }
}

/// Initial session state and download location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_gender")]
    pub gender: Gender,
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
}

fn default_gender() -> Gender {
    Gender::Female
}

fn default_download_dir() -> String {
    ".".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            gender: default_gender(),
            download_dir: default_download_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_str().ok_or_else(|| {
            AppError::Config(config::ConfigError::Message(
                "Configuration path is not valid UTF-8".to_string(),
            ))
        })?;

        let config = Config::builder()
            // Start with default values
            .set_default("api.key", std::env::var(API_KEY_ENV).unwrap_or_default())?
            .set_default("api.base_url", default_base_url())?
            .set_default("api.model", default_model())?
            .set_default("ui.language", "zh")?
            .set_default("ui.gender", "female")?
            .set_default("ui.download_dir", default_download_dir())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            // Load from configuration file
            .add_source(File::with_name(path).required(false))
            // Override with environment variables (prefixed with HAIRSTYLE__)
            .add_source(
                Environment::with_prefix("HAIRSTYLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }

        if self.api.model.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "api.model cannot be empty".to_string(),
            )));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(AppError::Config(config::ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            ))));
        }

        if self.ui.gender == Gender::Unisex {
            return Err(AppError::Config(config::ConfigError::Message(
                "ui.gender must be 'female' or 'male'".to_string(),
            )));
        }

        if !["json", "text"].contains(&self.logging.format.as_str()) {
            return Err(AppError::Config(config::ConfigError::Message(format!(
                "logging.format must be 'json' or 'text', got '{}'",
                self.logging.format
            ))));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
