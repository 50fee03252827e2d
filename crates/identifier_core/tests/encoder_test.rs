//! Encoder and asset tests.

use identifier_core::{
    AnalysisRequest, AnalysisResult, ImageAsset, decode_data_url, to_base64_payload,
};

// 1x1 transparent PNG
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0xF3, 0xFF, 0x61, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x60,
    0x60, 0x00, 0x00, 0x00, 0x04, 0x00, 0x01, 0x27, 0x6B, 0xB1, 0x42, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[test]
fn test_preview_decodes_back_to_file_bytes() {
    let asset = ImageAsset::builder()
        .bytes(PIXEL_PNG.to_vec())
        .mime("image/png")
        .name(Some("photo.png".to_string()))
        .build()
        .expect("Valid asset");

    let (bytes, mime) = decode_data_url(&asset.data_url()).expect("Preview is a data URL");
    assert_eq!(bytes, PIXEL_PNG);
    assert_eq!(mime, "image/png");
}

#[test]
fn test_payload_round_trips_through_data_url() {
    let asset = ImageAsset::new(PIXEL_PNG.to_vec(), "image/png");
    let encoded = to_base64_payload(&asset).expect("Asset encodes");

    let rebuilt = format!("data:{};base64,{}", encoded.mime_type(), encoded.base64());
    assert_eq!(rebuilt, asset.data_url());
}

#[test]
fn test_declared_mime_is_trusted() {
    // Not an image at all; the encoder does not look inside.
    let asset = ImageAsset::new(b"plain text".to_vec(), "image/webp");
    let encoded = to_base64_payload(&asset).expect("Any bytes encode");
    assert_eq!(encoded.mime_type(), "image/webp");
}

#[test]
fn test_request_carries_prompt_and_image() {
    let asset = ImageAsset::new(PIXEL_PNG.to_vec(), "image/png");
    let encoded = to_base64_payload(&asset).expect("Asset encodes");
    let request = AnalysisRequest::new(encoded.clone(), "Describe this.");

    assert_eq!(request.prompt(), "Describe this.");
    assert_eq!(request.image(), &encoded);
}

#[test]
fn test_result_paragraphs_follow_newlines() {
    let result = AnalysisResult::new("A red mug.\nCategory: kitchenware\nUsed for coffee.");
    assert_eq!(
        result.paragraphs(),
        vec!["A red mug.", "Category: kitchenware", "Used for coffee."]
    );
    assert_eq!(result.to_string(), result.text());
}

#[test]
fn test_debug_output_hides_bytes() {
    let asset = ImageAsset::new(vec![7u8; 4096], "image/jpeg");
    let debug = format!("{:?}", asset);
    assert!(debug.contains("<4096 bytes>"));
    assert!(!debug.contains("7, 7"));
}
