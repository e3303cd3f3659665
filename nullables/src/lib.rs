//! Nullable infrastructure for deterministic testing.
//!
//! The pipeline's external collaborators (OCR engine, submission sink,
//! camera) are abstracted behind traits in `verid-session`. This crate
//! provides test-friendly implementations that:
//! - Return scripted, deterministic values
//! - Can be controlled programmatically
//! - Never touch hardware, the filesystem, or the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod camera;
pub mod ocr;
pub mod sink;

pub use camera::NullCamera;
pub use ocr::NullOcrEngine;
pub use sink::NullSink;
