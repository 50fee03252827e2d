//! Gemini `generateContent` client.
//!
//! Sends a single user turn holding the prompt text and one inline image.

mod client;
mod conversions;
mod dto;

pub use client::{
    API_KEY_VARS, DEFAULT_BASE_URL, GeminiSettings, GeminiSettingsBuilder, GeminiVisionClient,
    api_key_from_env,
};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
    PromptFeedback, RequestContent, ResponsePart,
};
