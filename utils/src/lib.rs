//! Shared utilities for the verid pipeline.

pub mod logging;

pub use logging::init_tracing;
