//! Captured document images.

use serde::{Deserialize, Serialize};

/// Where a document image came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureSource {
    /// Uploaded by the user as a file.
    Upload,
    /// Captured from a live camera feed.
    LiveCamera,
}

/// Raw bytes of a captured document image.
///
/// The pipeline never decodes the image itself — the bytes are handed to the
/// OCR engine as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData(Vec<u8>);

impl ImageData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// An empty image cannot start a capture attempt.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&[u8]> for ImageData {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
