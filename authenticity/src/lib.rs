//! Authenticity scoring for identity-card OCR text.
//!
//! A fixed set of independent boolean indicators is evaluated against the
//! raw recognized text. The score is the count of true indicators; the
//! decision additionally requires the identifier-pattern indicator and the
//! negative (foreign-document) indicator to hold. Scoring is a pure
//! function of the text — no side effects, nothing to await.

pub mod indicators;
pub mod scorer;

pub use indicators::Indicator;
pub use scorer::{AuthenticityAssessment, AuthenticityDecision, AuthenticityScorer};
