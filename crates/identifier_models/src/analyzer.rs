//! Provider-independent analysis trait.

use async_trait::async_trait;
use identifier_core::AnalysisRequest;
use identifier_error::ModelResult;
use std::sync::Arc;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Instruction sent with every image when none is configured.
pub const DEFAULT_PROMPT: &str = "Analyze this image and provide detailed information about the object(s) in it. Include: 1) Main object name and category 2) Key features and characteristics 3) Possible uses or applications 4) Any notable details or patterns. Be specific but concise.";

/// A vision-capable model that describes images.
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    /// Sends the image and prompt, returning the model's text unmodified.
    ///
    /// Implementations make exactly one request and never retry.
    async fn analyze(&self, request: &AnalysisRequest) -> ModelResult<String>;

    /// Identifier of the model in use.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: VisionAnalyzer + ?Sized> VisionAnalyzer for Arc<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> ModelResult<String> {
        (**self).analyze(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
