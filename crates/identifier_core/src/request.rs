//! Analysis request type.

use crate::EncodedImage;
use derive_getters::Getters;

/// One image plus the instruction sent alongside it.
///
/// Built immediately before each model call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnalysisRequest {
    /// Encoded image payload
    image: EncodedImage,
    /// Natural-language instruction for the model
    prompt: String,
}

impl AnalysisRequest {
    /// Creates a request from an encoded image and a prompt.
    pub fn new(image: EncodedImage, prompt: impl Into<String>) -> Self {
        Self {
            image,
            prompt: prompt.into(),
        }
    }

    /// Returns a builder for constructing an AnalysisRequest.
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }
}
