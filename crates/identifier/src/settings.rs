//! Layered configuration.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`identifier.toml` in the working directory, or `--config`)
//! 3. `IDENTIFIER_*` environment variables, with `__` between section and
//!    key (e.g. `IDENTIFIER_MODEL__MODEL=gemini-1.5-pro`)
//!
//! The API key is never read from here; see
//! [`api_key_from_env`](identifier_models::api_key_from_env).

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use identifier_capture::{CaptureOptions, DEFAULT_CAPTURE_DELAY, DEFAULT_JPEG_QUALITY};
use identifier_contact::DEFAULT_CONTACT_ENDPOINT;
use identifier_error::{ConfigError, IdentifierResult};
use identifier_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_PROMPT, GeminiSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "identifier.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "IDENTIFIER";

/// Vision model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier
    model: String,
    /// Instruction sent with every image
    prompt: String,
    /// API base URL
    base_url: String,
    /// Request timeout in seconds
    timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

/// Camera snapshot settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct CaptureConfig {
    /// Wait between opening the camera and grabbing the frame
    delay_ms: u64,
    /// JPEG quality, 1-100
    jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_CAPTURE_DELAY.as_millis() as u64,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ContactConfig {
    /// URL the contact form is posted to
    endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct IdentifierConfig {
    /// `[model]` section
    model: ModelConfig,
    /// `[capture]` section
    capture: CaptureConfig,
    /// `[contact]` section
    contact: ContactConfig,
}

impl IdentifierConfig {
    /// Loads defaults, then the config file, then `IDENTIFIER_*` variables.
    ///
    /// An explicit `path` must exist; the default `identifier.toml` is
    /// optional.
    ///
    /// # Errors
    ///
    /// Fails if a file cannot be read or parsed, or a value is out of range.
    pub fn load(path: Option<&Path>) -> IdentifierResult<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// Like [`load`](Self::load) with a caller-supplied environment source.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load_with_env(path: Option<&Path>, environment: Environment) -> IdentifierResult<Self> {
        let defaults = Config::try_from(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to prepare defaults: {}", e)))?;

        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(environment)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;
        debug!(
            model = %config.model.model,
            delay_ms = config.capture.delay_ms,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Environment source for `IDENTIFIER_*` variables.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> IdentifierResult<()> {
        if self.model.model.trim().is_empty() {
            return Err(ConfigError::new("model.model must not be empty").into());
        }
        if self.model.prompt.trim().is_empty() {
            return Err(ConfigError::new("model.prompt must not be empty").into());
        }
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::new("model.timeout_secs must be positive").into());
        }
        if !(1..=100).contains(&self.capture.jpeg_quality) {
            return Err(ConfigError::new(format!(
                "capture.jpeg_quality must be between 1 and 100, got {}",
                self.capture.jpeg_quality
            ))
            .into());
        }
        Ok(())
    }

    /// Client settings for the configured model.
    ///
    /// # Errors
    ///
    /// Fails if the settings cannot be assembled.
    pub fn gemini_settings(&self, api_key: impl Into<String>) -> IdentifierResult<GeminiSettings> {
        GeminiSettings::builder()
            .api_key(api_key.into())
            .model(self.model.model.clone())
            .base_url(self.model.base_url.clone())
            .timeout(Duration::from_secs(self.model.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid model settings: {}", e)).into())
    }

    /// Snapshot options from the `[capture]` section.
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            delay: Duration::from_millis(self.capture.delay_ms),
            jpeg_quality: self.capture.jpeg_quality,
        }
    }
}
