//! Base64 payload extraction.
//!
//! The payload sent to the vision model is the base64 body of the asset's
//! data URL: everything after the first comma of `data:<mime>;base64,<body>`.

use crate::ImageAsset;
use base64::{Engine as _, engine::general_purpose};
use derive_getters::Getters;
use identifier_error::{EncodeError, EncodeErrorKind, EncodeResult};
use tracing::{debug, instrument, warn};

/// Base64 payload plus MIME type, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EncodedImage {
    /// Base64 body without any data URL prefix
    base64: String,
    /// MIME type of the decoded bytes
    mime_type: String,
}

impl EncodedImage {
    /// Pairs an already-encoded payload with its MIME type.
    pub fn new(base64: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Builds `data:<mime>;base64,<payload>` for the given bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Returns the part of a data URL after its first comma.
///
/// Returns `None` when there is no comma or nothing follows it.
///
/// # Examples
///
/// ```
/// use identifier_core::strip_data_url_prefix;
///
/// assert_eq!(strip_data_url_prefix("data:image/png;base64,iVBOR"), Some("iVBOR"));
/// assert_eq!(strip_data_url_prefix("data:image/png;base64,"), None);
/// assert_eq!(strip_data_url_prefix("iVBOR"), None);
/// ```
pub fn strip_data_url_prefix(url: &str) -> Option<&str> {
    url.split_once(',')
        .map(|(_, payload)| payload)
        .filter(|payload| !payload.is_empty())
}

/// Converts an asset into the payload sent to the vision model.
///
/// # Errors
///
/// Fails with [`EncodeErrorKind::EmptyAsset`] for an asset without bytes and
/// [`EncodeErrorKind::MissingPayload`] if no payload survives prefix stripping.
#[instrument(skip(asset), fields(mime = %asset.mime(), bytes = asset.len()))]
pub fn to_base64_payload(asset: &ImageAsset) -> EncodeResult<EncodedImage> {
    if asset.is_empty() {
        warn!("Refusing to encode empty asset");
        return Err(EncodeError::new(EncodeErrorKind::EmptyAsset));
    }

    let url = asset.data_url();
    let payload = strip_data_url_prefix(&url).ok_or_else(|| {
        warn!("Data URL carried no payload");
        EncodeError::new(EncodeErrorKind::MissingPayload)
    })?;

    debug!(payload_len = payload.len(), "Encoded image payload");
    Ok(EncodedImage::new(payload, asset.mime().as_str()))
}

/// Decodes a base64 data URL into its bytes and MIME type.
///
/// # Errors
///
/// Fails if the URL is not of the form `data:<mime>;base64,<payload>` or the
/// payload is not valid base64.
pub fn decode_data_url(url: &str) -> EncodeResult<(Vec<u8>, String)> {
    let (header, payload) = url
        .split_once(',')
        .ok_or_else(|| EncodeError::new(EncodeErrorKind::MalformedDataUrl(truncate(url))))?;

    let mime = header
        .strip_prefix("data:")
        .and_then(|rest| rest.strip_suffix(";base64"))
        .ok_or_else(|| EncodeError::new(EncodeErrorKind::MalformedDataUrl(truncate(header))))?;

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Base64Decode(e.to_string())))?;

    Ok((bytes, mime.to_string()))
}

fn truncate(s: &str) -> String {
    s.chars().take(64).collect()
}
