//! Identity-document verification sessions.
//!
//! Sequences capture → recognition → authenticity scoring → field
//! extraction → user review → cross-validation → submission, with explicit
//! retry and reset semantics. The OCR engine and submission sink are
//! injected capability traits, so the whole pipeline runs against
//! deterministic fakes in tests.

pub mod capture;
pub mod config;
pub mod engine;
pub mod error;
pub mod service;
pub mod state;

pub use capture::{capture_from_camera, CameraDevice, CameraLease, CaptureError};
pub use config::ServiceConfig;
pub use engine::{EngineError, OcrEngine, SinkError, SubmissionReceipt, SubmissionSink};
pub use error::SessionError;
pub use service::VerificationService;
pub use state::{CaptureSession, SessionSnapshot, SessionStatus, VerificationRecord};
