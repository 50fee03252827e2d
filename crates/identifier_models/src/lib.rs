//! Vision model integrations for Object Identifier.
//!
//! [`VisionAnalyzer`] is the seam between the analysis session and a
//! concrete provider. [`GeminiVisionClient`] talks to Google's
//! `generateContent` REST endpoint.

mod analyzer;
mod gemini;

pub use analyzer::{DEFAULT_MODEL, DEFAULT_PROMPT, VisionAnalyzer};
pub use gemini::{
    API_KEY_VARS, Candidate, Content, DEFAULT_BASE_URL, GeminiSettings, GeminiSettingsBuilder,
    GeminiVisionClient, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
    PromptFeedback, RequestContent, ResponsePart, api_key_from_env,
};
