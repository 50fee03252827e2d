//! Core data types for the Object Identifier workspace.
//!
//! This crate provides the values that flow through the
//! capture → encode → request → display pipeline.

mod asset;
mod encoder;
mod request;
mod result;

pub use asset::{ImageAsset, ImageAssetBuilder, OCTET_STREAM};
pub use encoder::{
    EncodedImage, data_url, decode_data_url, strip_data_url_prefix, to_base64_payload,
};
pub use request::{AnalysisRequest, AnalysisRequestBuilder};
pub use result::AnalysisResult;
