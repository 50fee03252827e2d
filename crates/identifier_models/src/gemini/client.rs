//! Gemini vision client.

use crate::VisionAnalyzer;
use crate::gemini::conversions;
use crate::gemini::dto::GenerateContentResponse;
use async_trait::async_trait;
use derive_getters::Getters;
use identifier_core::AnalysisRequest;
use identifier_error::{ModelError, ModelErrorKind, ModelResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables searched for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_GEMINI_API_KEY"];

/// Reads the API key from the first non-empty variable in [`API_KEY_VARS`].
///
/// # Errors
///
/// Returns [`ModelErrorKind::MissingApiKey`] if none is set.
pub fn api_key_from_env() -> ModelResult<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| ModelError::new(ModelErrorKind::MissingApiKey))
}

/// Connection settings for [`GeminiVisionClient`].
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiSettings {
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// Model identifier, e.g. `gemini-1.5-flash`
    #[builder(default = "crate::DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL up to and excluding `/models`
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Whole-request timeout
    #[builder(default = "Duration::from_secs(60)")]
    timeout: Duration,
}

impl GeminiSettings {
    /// Creates a builder for `GeminiSettings`.
    pub fn builder() -> GeminiSettingsBuilder {
        GeminiSettingsBuilder::default()
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for Gemini's `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiVisionClient {
    client: Client,
    settings: GeminiSettings,
    endpoint: String,
}

impl GeminiVisionClient {
    /// Creates a client from settings.
    ///
    /// # Errors
    ///
    /// Fails if the API key is blank or the HTTP client cannot be built.
    #[instrument(
        skip(settings),
        fields(model = %settings.model(), base_url = %settings.base_url())
    )]
    pub fn new(settings: GeminiSettings) -> ModelResult<Self> {
        if settings.api_key().trim().is_empty() {
            return Err(ModelError::new(ModelErrorKind::MissingApiKey));
        }

        let client = Client::builder()
            .timeout(*settings.timeout())
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::ClientCreation(e.to_string())))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            settings.base_url().trim_end_matches('/'),
            settings.model()
        );

        debug!(endpoint = %endpoint, "Created Gemini vision client");

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VisionAnalyzer for GeminiVisionClient {
    #[instrument(
        skip(self, request),
        fields(
            model = %self.settings.model(),
            mime = %request.image().mime_type(),
            payload_len = request.image().base64().len()
        )
    )]
    async fn analyze(&self, request: &AnalysisRequest) -> ModelResult<String> {
        let body = conversions::to_generate_request(request);

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.settings.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ModelError::new(ModelErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = conversions::error_message(&error_text);
            error!(status = %status, error = %message, "API error");
            return Err(ModelError::new(ModelErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelError::new(ModelErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(candidates = parsed.candidates.len(), "Received response");

        conversions::from_generate_response(&parsed).inspect_err(|e| {
            error!(error = %e, "Response carried no usable text");
        })
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}
