//! Fundamental types for the verid identity-verification pipeline.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: session ids, timestamps, captured images, OCR output, the
//! structured field records, and tunable verification parameters.

pub mod capture;
pub mod fields;
pub mod ocr;
pub mod params;
pub mod session_id;
pub mod time;

pub use capture::{CaptureSource, ImageData};
pub use fields::{DocumentField, ExtractedFields, UserInput};
pub use ocr::OcrResult;
pub use params::VerificationParams;
pub use session_id::SessionId;
pub use time::Timestamp;
