//! Capability traits for the pipeline's external collaborators.
//!
//! Both collaborators are injected so the pipeline runs against
//! deterministic fakes in tests; neither is given a timeout here — callers
//! wrap the futures if they need one.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use verid_types::{ImageData, OcrResult};

use crate::state::VerificationRecord;

/// OCR engine failure — transient, and distinct from a document rejection.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("recognition produced no text")]
    NoText,

    #[error("recognition engine failed: {0}")]
    Failed(String),
}

/// Submission sink failure. The verification record stays on the session so
/// resubmission does not re-run recognition.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}

/// Handle to a persisted verification record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
}

/// Turns a captured image into recognized text.
#[allow(async_fn_in_trait)]
pub trait OcrEngine {
    async fn recognize(&self, image: &ImageData) -> Result<OcrResult, EngineError>;
}

/// Persists an accepted verification record.
#[allow(async_fn_in_trait)]
pub trait SubmissionSink {
    async fn submit(&self, record: &VerificationRecord) -> Result<SubmissionReceipt, SinkError>;
}

impl<T: OcrEngine> OcrEngine for &T {
    async fn recognize(&self, image: &ImageData) -> Result<OcrResult, EngineError> {
        (**self).recognize(image).await
    }
}

impl<T: OcrEngine> OcrEngine for std::sync::Arc<T> {
    async fn recognize(&self, image: &ImageData) -> Result<OcrResult, EngineError> {
        (**self).recognize(image).await
    }
}

impl<T: SubmissionSink> SubmissionSink for &T {
    async fn submit(&self, record: &VerificationRecord) -> Result<SubmissionReceipt, SinkError> {
        (**self).submit(record).await
    }
}

impl<T: SubmissionSink> SubmissionSink for std::sync::Arc<T> {
    async fn submit(&self, record: &VerificationRecord) -> Result<SubmissionReceipt, SinkError> {
        (**self).submit(record).await
    }
}
