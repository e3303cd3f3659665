//! OCR engine output.

use serde::{Deserialize, Serialize};

/// The recognized text and engine confidence for one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OcrResult {
    /// Full recognized text, lines joined with newlines.
    pub text: String,
    /// Engine-reported confidence in `[0.0, 1.0]`.
    pub confidence: f32,
}

impl OcrResult {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// Whether the engine produced any usable text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
