//! In-memory image assets.

use crate::encoder;
use derive_getters::Getters;
use std::sync::OnceLock;

/// MIME type used when nothing better is known about a file.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// The image currently selected for analysis.
///
/// Created by a file pick or a camera capture, held only in memory and
/// replaced wholesale when the user picks again.
///
/// # Examples
///
/// ```
/// use identifier_core::ImageAsset;
///
/// let asset = ImageAsset::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg");
/// assert_eq!(asset.data_url(), "data:image/jpeg;base64,/9j/");
/// ```
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageAsset {
    /// Raw image bytes
    bytes: Vec<u8>,
    /// Declared MIME type
    mime: String,
    /// Name of the originating file, if any
    #[builder(default)]
    name: Option<String>,
    /// Data URL, encoded on first use
    #[builder(setter(skip))]
    #[getter(skip)]
    data_url: OnceLock<String>,
}

impl ImageAsset {
    /// Creates an unnamed asset.
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
            name: None,
            data_url: OnceLock::new(),
        }
    }

    /// Attaches the originating file name.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Returns a builder for constructing an ImageAsset.
    pub fn builder() -> ImageAssetBuilder {
        ImageAssetBuilder::default()
    }

    /// Display-ready `data:` URL of the asset.
    ///
    /// Encoded once per asset; later calls return the cached string.
    pub fn data_url(&self) -> &str {
        self.data_url.get_or_init(|| encoder::data_url(&self.mime, &self.bytes))
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the asset has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PartialEq for ImageAsset {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && self.mime == other.mime && self.name == other.name
    }
}

impl Eq for ImageAsset {}

// Image bytes can run to megabytes; keep them out of logs.
impl std::fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAsset")
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .field("mime", &self.mime)
            .field("name", &self.name)
            .finish()
    }
}
