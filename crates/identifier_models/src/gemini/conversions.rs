//! Conversions between core types and Gemini DTOs.

use crate::gemini::dto::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
    RequestContent,
};
use identifier_core::AnalysisRequest;
use identifier_error::{ModelError, ModelErrorKind, ModelResult};

/// Builds the single-turn request: prompt text first, then the image.
pub(crate) fn to_generate_request(request: &AnalysisRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user".to_string(),
            parts: vec![
                Part::Text {
                    text: request.prompt().clone(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: request.image().mime_type().clone(),
                        data: request.image().base64().clone(),
                    },
                },
            ],
        }],
    }
}

/// Concatenates the text parts of the first candidate.
pub(crate) fn from_generate_response(response: &GenerateContentResponse) -> ModelResult<String> {
    let Some(candidate) = response.candidates.first() else {
        let blocked = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone());
        return Err(match blocked {
            Some(reason) => ModelError::new(ModelErrorKind::Blocked(reason)),
            None => ModelError::new(ModelErrorKind::EmptyResponse),
        });
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.is_empty() {
        return Err(match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                ModelError::new(ModelErrorKind::Blocked(reason.to_string()))
            }
            _ => ModelError::new(ModelErrorKind::EmptyResponse),
        });
    }

    Ok(text)
}

/// Pulls the human-readable message out of an error body, if it has one.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{}: {}", status, envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identifier_core::EncodedImage;

    fn response(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).expect("valid response JSON")
    }

    #[test]
    fn request_has_prompt_then_inline_image() {
        let request = AnalysisRequest::new(EncodedImage::new("AAAA", "image/png"), "Describe.");
        let body = serde_json::to_value(to_generate_request(&request)).expect("serializes");

        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "Describe." },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn text_parts_are_joined_verbatim() {
        let parsed = response(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "A red mug.\n" }, { "text": "Ceramic." }]
                },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(from_generate_response(&parsed).unwrap(), "A red mug.\nCeramic.");
    }

    #[test]
    fn blocked_prompt_is_reported() {
        let parsed = response(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }));
        let err = from_generate_response(&parsed).unwrap_err();
        assert_eq!(err.kind, ModelErrorKind::Blocked("SAFETY".to_string()));
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let parsed = response(serde_json::json!({}));
        let err = from_generate_response(&parsed).unwrap_err();
        assert_eq!(err.kind, ModelErrorKind::EmptyResponse);
    }

    #[test]
    fn error_envelope_message_is_extracted() {
        let body =
            r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "INVALID_ARGUMENT: API key not valid.");
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }
}
